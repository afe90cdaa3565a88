//! Folder operations.

use promptdeck_core::types::{FolderId, PromptId};
use promptdeck_entity::Folder;

use super::{EntityStore, FOLDER_ID_PREFIX};
use crate::error::StoreError;

/// What a successful folder deletion removed and detached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderDeletion {
    /// The removed folder.
    pub folder: Folder,
    /// Prompts that were filed in it and are now unfiled.
    pub detached: Vec<PromptId>,
}

impl EntityStore {
    /// Create a folder appended after every real folder.
    pub fn create_folder(&mut self, name: &str) -> Result<Folder, StoreError> {
        let name = self.validate_folder_name(name, None)?;

        let order = self.state.real_folders().count() as i64;
        let folder = Folder::new(FolderId::new(self.next_id(FOLDER_ID_PREFIX)), name, order);
        self.state.folders.push(folder.clone());
        self.reindex_folders();

        Ok(self.state.folder(&folder.id).cloned().unwrap_or(folder))
    }

    /// Rename an unlocked folder. The sentinel is never renamed.
    pub fn rename_folder(&mut self, id: &FolderId, name: &str) -> Result<Folder, StoreError> {
        let folder = self.state.folder(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })?;
        if folder.locked || folder.is_sentinel() {
            return Err(StoreError::Locked { id: id.to_string() });
        }
        let name = self.validate_folder_name(name, Some(id))?;

        let folder = self
            .state
            .folders
            .iter_mut()
            .find(|f| &f.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        folder.name = name;
        Ok(folder.clone())
    }

    /// Delete a folder and unfile its prompts.
    ///
    /// Returns `None` without changing anything when `id` is missing, the
    /// sentinel, or locked.
    pub fn delete_folder(&mut self, id: &FolderId) -> Option<FolderDeletion> {
        let index = self
            .state
            .folders
            .iter()
            .position(|f| &f.id == id && !f.is_sentinel() && !f.locked)?;
        let folder = self.state.folders.remove(index);

        let detached = self
            .state
            .prompts
            .iter_mut()
            .filter(|p| p.folder_id.as_ref() == Some(id))
            .map(|p| {
                p.folder_id = None;
                p.id.clone()
            })
            .collect();

        self.reindex_folders();
        Some(FolderDeletion { folder, detached })
    }

    /// Trim `name` and check it is non-empty and unique among real
    /// folders other than `except`.
    fn validate_folder_name(
        &self,
        name: &str,
        except: Option<&FolderId>,
    ) -> Result<String, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let taken = self
            .state
            .real_folders()
            .filter(|f| Some(&f.id) != except)
            .any(|f| f.name_matches(name));
        if taken {
            return Err(StoreError::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use promptdeck_entity::PromptDraft;

    use super::*;
    use crate::store::tests::store;

    #[test]
    fn test_create_folder_appends() {
        let mut store = store();
        let work = store.create_folder("  Work ").expect("create");
        assert_eq!(work.name, "Work");
        assert_eq!(work.order, Some(1));
        assert_eq!(work.id.as_str(), "folder-1");
        assert!(!work.locked);
    }

    #[test]
    fn test_duplicate_folder_rejected_ignoring_case() {
        let mut store = store();
        store.create_folder("Work").expect("create");
        let err = store.create_folder("work").expect_err("duplicate");
        assert_eq!(err, StoreError::DuplicateName { name: "work".into() });
        let works = store
            .state()
            .folders
            .iter()
            .filter(|f| f.name.eq_ignore_ascii_case("work"))
            .count();
        assert_eq!(works, 1);
    }

    #[test]
    fn test_empty_folder_name_rejected() {
        let mut store = store();
        let before = store.state().clone();
        assert_eq!(store.create_folder("   "), Err(StoreError::EmptyName));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_rename_rules() {
        let mut store = store();
        let work = store.create_folder("Work").expect("create").id;
        store.create_folder("Home").expect("create");

        assert_eq!(
            store.rename_folder(&FolderId::all(), "Everything"),
            Err(StoreError::Locked { id: "all".into() })
        );
        assert_eq!(store.rename_folder(&work, " "), Err(StoreError::EmptyName));
        assert_eq!(
            store.rename_folder(&work, "HOME"),
            Err(StoreError::DuplicateName { name: "HOME".into() })
        );
        assert!(matches!(
            store.rename_folder(&FolderId::new("missing"), "X"),
            Err(StoreError::NotFound { .. })
        ));

        let renamed = store.rename_folder(&work, "work stuff").expect("rename");
        assert_eq!(renamed.name, "work stuff");
        // Changing only the case of its own name is allowed.
        assert!(store.rename_folder(&work, "Work Stuff").is_ok());
    }

    #[test]
    fn test_delete_folder_detaches_prompts() {
        let mut store = store();
        let work = store.create_folder("Work").expect("create").id;
        let home = store.create_folder("Home").expect("create").id;
        for i in 0..3 {
            let draft = PromptDraft::new("", format!("work {i}"), Some(work.to_string()));
            store.create_prompt(&draft, i).expect("prompt");
        }
        let draft = PromptDraft::new("", "home", Some(home.to_string()));
        let home_prompt = store.create_prompt(&draft, 9).expect("prompt");

        let deletion = store.delete_folder(&work).expect("deleted");
        assert_eq!(deletion.folder.id, work);
        assert_eq!(deletion.detached.len(), 3);
        assert!(store.state().folder(&work).is_none());
        for id in &deletion.detached {
            assert_eq!(store.state().prompt(id).and_then(|p| p.folder_id.clone()), None);
        }
        assert_eq!(
            store.state().prompt(&home_prompt.id).and_then(|p| p.folder_id.clone()),
            Some(home.clone())
        );
        assert_eq!(store.state().prompts.len(), 4);

        let orders: Vec<Option<i64>> = store.state().real_folders().map(|f| f.order).collect();
        assert_eq!(orders, [Some(0), Some(1)]);
    }

    #[test]
    fn test_delete_sentinel_or_missing_is_noop() {
        let mut store = store();
        let before = store.state().clone();
        assert!(store.delete_folder(&FolderId::all()).is_none());
        assert!(store.delete_folder(&FolderId::new("missing")).is_none());
        assert_eq!(store.state(), &before);
    }
}
