pub mod dish_form;
