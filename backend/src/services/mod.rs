pub mod food_list_service;
