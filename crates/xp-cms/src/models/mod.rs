//! Typed content records.
//!
//! Every record is an immutable value rebuilt from each fetch. Only fields
//! the websites use are declared; serde ignores the rest of the API response.

mod article;
mod author;
mod component;
mod image;
mod page;
mod radar;
mod settings;
mod social;

pub use article::{Article, Tag};
pub use author::{Author, Team};
pub use component::{
    Hero, Listing, ListItem, ListItemWithImage, Mission, PageComponent, Quote, TextBlock,
};
pub use image::{Image, ImageWithTitle};
pub use page::{HomePage, Link, Page};
pub use radar::{RadarItem, RadarQuadrant, RadarRing};
pub use settings::{GlobalSettings, NavLink, navigation_links};
pub use social::{Social, enabled_socials};
