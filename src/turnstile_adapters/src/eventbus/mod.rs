pub mod in_process_event_bus;

pub use in_process_event_bus::InProcessEventBus;
