//! Folder-based project discovery.
//!
//! A category root holds one subdirectory per project. Each project folder
//! may contain a [`METADATA_FILE_NAME`] file and any number of images. Every
//! read below the category root is optional: a missing or unreadable file or
//! folder means "nothing there", is logged, and never fails the scan.

use std::ffi::OsString;
use std::fs::FileType;
use std::io;
use std::path::Path;

use crate::error::CoreError;
use crate::metadata::{parse_metadata, METADATA_FILE_NAME};
use crate::project::{Project, ProjectMetadata};

// ── Constants ────────────────────────────────────────────────────────

/// Image file extensions served as project photos (compared lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

// ── Pure helpers ─────────────────────────────────────────────────────

/// Whether `file_name` has an allow-listed image extension, ignoring case.
///
/// A leading dot does not start an extension, so `.png` is not an image.
pub fn is_image_file(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Public URL path of an image: `/<category folder>/<project folder>/<file>`.
pub fn image_path(category_folder: &str, project_folder: &str, file_name: &str) -> String {
    format!("/{category_folder}/{project_folder}/{file_name}")
}

// ── Filesystem reads ─────────────────────────────────────────────────

struct Entry {
    name: String,
    file_type: FileType,
}

/// Turn one raw directory entry into an [`Entry`], or `None` to skip it.
///
/// Entries whose names are not valid UTF-8 cannot be turned into public
/// paths. Entries whose type cannot be read (e.g. removed mid-listing) are
/// skipped so their siblings still come through.
fn accept_entry(dir: &Path, name: OsString, file_type: io::Result<FileType>) -> Option<Entry> {
    let Ok(name) = name.into_string() else {
        tracing::warn!(dir = %dir.display(), "Skipping entry with non UTF-8 name");
        return None;
    };
    match file_type {
        Ok(file_type) => Some(Entry { name, file_type }),
        Err(e) => {
            tracing::warn!(dir = %dir.display(), entry = %name, error = %e, "Skipping unreadable entry");
            None
        }
    }
}

/// List the direct children of `dir`, sorted by name.
///
/// Only opening the directory can fail. A read error part-way through
/// stops the listing and keeps the entries read so far.
async fn list_dir(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut reader = tokio::fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    loop {
        let entry = match reader.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "Directory listing interrupted");
                break;
            }
        };
        let file_type = entry.file_type().await;
        if let Some(entry) = accept_entry(dir, entry.file_name(), file_type) {
            entries.push(entry);
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Read and parse the metadata file of a project folder.
///
/// Returns `None` when the file is absent or cannot be read.
pub async fn read_metadata(project_dir: &Path) -> Option<ProjectMetadata> {
    let path = project_dir.join(METADATA_FILE_NAME);
    match tokio::fs::read(&path).await {
        Ok(bytes) => Some(parse_metadata(&String::from_utf8_lossy(&bytes))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No metadata file, using folder name");
            None
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Unreadable metadata file, ignoring");
            None
        }
    }
}

/// List the public paths of all images directly inside a project folder.
///
/// Returns `None` when the folder cannot be listed.
pub async fn list_images(
    project_dir: &Path,
    category_folder: &str,
    project_folder: &str,
) -> Option<Vec<String>> {
    match list_dir(project_dir).await {
        Ok(entries) => Some(
            entries
                .into_iter()
                .filter(|e| !e.file_type.is_dir() && is_image_file(&e.name))
                .map(|e| image_path(category_folder, project_folder, &e.name))
                .collect(),
        ),
        Err(e) => {
            tracing::warn!(dir = %project_dir.display(), error = %e, "Failed to list project images");
            None
        }
    }
}

// ── Catalog building ─────────────────────────────────────────────────

/// Build one project record from its folder.
pub async fn build_project(category_root: &Path, category_folder: &str, folder: &str) -> Project {
    let project_dir = category_root.join(folder);
    let mut project = Project::from_folder(folder);

    if let Some(meta) = read_metadata(&project_dir).await {
        project.apply(meta);
    }
    if let Some(images) = list_images(&project_dir, category_folder, folder).await {
        project.images = images;
    }

    project
}

/// Discover every project under a category root.
///
/// The last path component of `category_root` is used as the public prefix
/// of image paths. Project folders are scanned concurrently and returned
/// sorted by folder name. Files directly in the root are ignored.
///
/// A missing root is the normal "no projects yet" state and yields an empty
/// list. Any other failure to list the root is returned as
/// [`CoreError::Io`].
pub async fn build_category(category_root: &Path) -> Result<Vec<Project>, CoreError> {
    let entries = match list_dir(category_root).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(root = %category_root.display(), "Category folder not found, no projects");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(CoreError::Io {
                path: category_root.to_path_buf(),
                source,
            });
        }
    };

    let category_folder = category_root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let folders: Vec<String> = entries
        .into_iter()
        .filter(|e| e.file_type.is_dir())
        .map(|e| e.name)
        .collect();

    let projects = futures::future::join_all(
        folders
            .iter()
            .map(|folder| build_project(category_root, &category_folder, folder)),
    )
    .await;

    tracing::debug!(
        root = %category_root.display(),
        count = projects.len(),
        "Discovered projects"
    );
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use assert_matches::assert_matches;

    use super::*;

    fn touch(path: &Path) {
        fs::write(path, b"").expect("write file");
    }

    // -- is_image_file tests --

    #[test]
    fn test_image_extensions() {
        for name in &["a.jpg", "a.jpeg", "a.png", "a.gif", "a.webp"] {
            assert!(is_image_file(name), "name: {name}");
        }
    }

    #[test]
    fn test_image_extensions_case_insensitive() {
        assert!(is_image_file("photo.JPG"));
        assert!(is_image_file("photo.WebP"));
    }

    #[test]
    fn test_non_image_files() {
        for name in &["notes.txt", "plan.pdf", "project.txt", "png", ".png", "photo.", "photo.jpg.bak"] {
            assert!(!is_image_file(name), "name: {name}");
        }
    }

    #[test]
    fn test_image_path() {
        assert_eq!(
            image_path("completed_projects", "Villa_One", "front.jpg"),
            "/completed_projects/Villa_One/front.jpg"
        );
    }

    // -- build_category tests --

    #[tokio::test]
    async fn test_missing_root_is_empty() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let projects = build_category(&dir.path().join("completed_projects"))
            .await
            .expect("missing root is not an error");
        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn test_folder_without_metadata() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join("completed_projects");
        fs::create_dir_all(root.join("Green_Gardens_Villa")).expect("create dirs");

        let projects = build_category(&root).await.expect("build");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Green Gardens Villa");
        assert_eq!(projects[0].owner, "");
        assert_eq!(projects[0].folder, "Green_Gardens_Villa");
        assert!(projects[0].images.is_empty());
    }

    #[tokio::test]
    async fn test_image_filtering() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join("ongoing_projects");
        let project_dir = root.join("Site_A");
        fs::create_dir_all(&project_dir).expect("create dirs");
        touch(&project_dir.join("photo.JPG"));
        touch(&project_dir.join("notes.txt"));
        touch(&project_dir.join("plan.pdf"));

        let projects = build_category(&root).await.expect("build");
        assert_eq!(projects[0].images, vec!["/ongoing_projects/Site_A/photo.JPG"]);
    }

    #[tokio::test]
    async fn test_metadata_overlay_and_sorted_output() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join("completed_projects");
        fs::create_dir_all(root.join("b_house")).expect("create dirs");
        fs::create_dir_all(root.join("a_house")).expect("create dirs");
        fs::write(
            root.join("b_house").join(METADATA_FILE_NAME),
            "Project Name: Bella House\nOwner: First\nOwner: Second\nReview: Great\n",
        )
        .expect("write metadata");
        touch(&root.join("b_house").join("z.png"));
        touch(&root.join("b_house").join("a.jpeg"));

        let projects = build_category(&root).await.expect("build");
        let folders: Vec<&str> = projects.iter().map(|p| p.folder.as_str()).collect();
        assert_eq!(folders, vec!["a_house", "b_house"]);

        let bella = &projects[1];
        assert_eq!(bella.name, "Bella House");
        assert_eq!(bella.owner, "Second");
        assert_eq!(bella.address, "");
        assert_eq!(bella.review, "Great");
        assert_eq!(
            bella.images,
            vec![
                "/completed_projects/b_house/a.jpeg",
                "/completed_projects/b_house/z.png",
            ]
        );
    }

    #[tokio::test]
    async fn test_files_in_root_and_image_named_directories_ignored() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join("upcoming_projects");
        let project_dir = root.join("Tower");
        fs::create_dir_all(project_dir.join("renders.png")).expect("create dirs");
        touch(&root.join("stray.jpg"));
        touch(&project_dir.join("site.webp"));

        let projects = build_category(&root).await.expect("build");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].images, vec!["/upcoming_projects/Tower/site.webp"]);
    }

    #[tokio::test]
    async fn test_metadata_without_images() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join("completed_projects");
        fs::create_dir_all(root.join("Empty_Site")).expect("create dirs");
        fs::write(root.join("Empty_Site").join(METADATA_FILE_NAME), "Owner: Someone\n")
            .expect("write metadata");

        let projects = build_category(&root).await.expect("build");
        assert_eq!(projects[0].owner, "Someone");
        assert_eq!(projects[0].name, "Empty Site");
        assert!(projects[0].images.is_empty());
    }

    #[tokio::test]
    async fn test_root_is_a_file_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join("completed_projects");
        touch(&root);

        let result = build_category(&root).await;
        assert_matches!(result, Err(CoreError::Io { .. }));
    }

    // -- accept_entry tests --

    #[test]
    fn test_accept_entry_keeps_readable_entry() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let file_type = fs::metadata(dir.path()).expect("stat").file_type();

        let entry = accept_entry(dir.path(), OsString::from("Villa"), Ok(file_type))
            .expect("entry kept");
        assert_eq!(entry.name, "Villa");
        assert!(entry.file_type.is_dir());
    }

    #[test]
    fn test_accept_entry_skips_vanished_entry() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let gone = Err(io::Error::new(io::ErrorKind::NotFound, "entry removed"));

        assert!(accept_entry(dir.path(), OsString::from("Villa"), gone).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_accept_entry_skips_non_utf8_name() {
        use std::os::unix::ffi::OsStringExt;

        let dir = tempfile::tempdir().expect("create temp dir");
        let file_type = fs::metadata(dir.path()).expect("stat").file_type();
        let name = OsString::from_vec(vec![0x66, 0x6f, 0xff]);

        assert!(accept_entry(dir.path(), name, Ok(file_type)).is_none());
    }

    // -- read helper tests --

    #[tokio::test]
    async fn test_read_metadata_absent() {
        let dir = tempfile::tempdir().expect("create temp dir");
        assert_eq!(read_metadata(dir.path()).await, None);
    }

    #[tokio::test]
    async fn test_list_images_missing_dir() {
        let dir = tempfile::tempdir().expect("create temp dir");
        assert_eq!(list_images(&dir.path().join("nope"), "c", "p").await, None);
    }
}
