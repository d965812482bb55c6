pub mod lead_events;
