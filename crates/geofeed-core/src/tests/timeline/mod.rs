mod coords;
mod format;
mod post;
