pub mod form_config;
