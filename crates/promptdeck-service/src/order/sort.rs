//! Display ordering for folders and prompts.

use std::cmp::Ordering;

use promptdeck_entity::{Folder, Prompt};

/// Prompts by `order` ascending (absent as 0), then most recently updated.
pub fn prompt_cmp(a: &Prompt, b: &Prompt) -> Ordering {
    a.order
        .unwrap_or(0)
        .cmp(&b.order.unwrap_or(0))
        .then_with(|| b.updated_at_millis().cmp(&a.updated_at_millis()))
}

/// Folders by `order` ascending (absent as 0), then by name.
pub fn folder_cmp(a: &Folder, b: &Folder) -> Ordering {
    a.order
        .unwrap_or(0)
        .cmp(&b.order.unwrap_or(0))
        .then_with(|| a.name.cmp(&b.name))
}

/// Stable-sort prompts into display order.
pub fn sort_prompts(prompts: &mut [Prompt]) {
    prompts.sort_by(prompt_cmp);
}

/// Stable-sort folders into display order.
pub fn sort_folders(folders: &mut [Folder]) {
    folders.sort_by(folder_cmp);
}
