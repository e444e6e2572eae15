//! Slugpress - static post pages from a headless CMS.
//!
//! Each published post becomes `{output}/{slug}/index.html`: a cover with
//! title, excerpt and "Read more", then publish date, tags and the post
//! body. Clicking a language tag shows a translation disclosure popup.
//!
//! | Module    | Role                                                  |
//! |-----------|-------------------------------------------------------|
//! | `content` | `ContentSource` hooks and the Ghost content API client |
//! | `popup`   | Disclosure catalog and popup state machine             |
//! | `scroll`  | "Read more" scroll target                              |
//! | `page`    | Post page rendering                                    |
//! | `build`   | Parallel fetch/render/write and asset copying          |
//! | `serve`   | Local preview server                                   |

pub mod build;
pub mod cli;
pub mod config;
pub mod content;
pub mod logger;
pub mod page;
pub mod popup;
pub mod scroll;
pub mod serve;
pub mod utils;
