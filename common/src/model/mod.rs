pub mod dish;
