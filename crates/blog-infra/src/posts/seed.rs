//! Posts loaded into the store when the server starts.

use blog_core::domain::BlogPost;

const SEED: &[(&str, &str, &str)] = &[
    (
        "Ten things about ownership",
        "Every value has exactly one owner. When the owner goes out of scope, the value is dropped.",
        "Ferris Crab",
    ),
    (
        "An anarchist reads the borrow checker",
        "Shared references may alias, mutable references may not. Freedom within rules.",
        "Emma Goldman",
    ),
    (
        "Notes on in-memory stores",
        "Everything here disappears on restart, which is the point.",
        "Grace Hopper",
    ),
];

/// Build the fixed set of seed posts, each with a fresh id and publish date.
pub fn seed_posts() -> Vec<BlogPost> {
    SEED.iter()
        .map(|(title, content, author)| {
            BlogPost::new(title.to_string(), content.to_string(), author.to_string())
        })
        .collect()
}
