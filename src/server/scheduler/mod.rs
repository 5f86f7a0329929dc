pub mod status_monitor;
