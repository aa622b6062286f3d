mod app;
mod dom;
mod drawing;
mod export;
mod palette;
mod profile_card;
mod render;
mod router;
mod selector;

pub use app::run;
