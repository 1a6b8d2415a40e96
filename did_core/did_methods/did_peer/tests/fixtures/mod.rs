pub mod multiple_services;
pub mod no_routing_keys;
pub mod numalgo0;
