mod location_provider;
mod tooltip;
mod widget;
