mod coords;
mod format;
mod post;

pub use {
    coords::Coordinates,
    format::{format_date, format_timer},
    post::{MediaBlob, MediaKind, Post, PostId, Timeline},
};
