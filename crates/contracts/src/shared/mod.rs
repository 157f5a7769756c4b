pub mod form_submit;
