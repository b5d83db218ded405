use crate::config::WalkOptions;
use crate::error::EngineError;
use ignore::{WalkBuilder, WalkState};
use std::path::PathBuf;

/// Parallel recursive directory walk.
///
/// `on_file` is called once per regular file and `on_error` once per
/// directory that could not be listed or entry that could not be inspected.
/// Either callback may return [`WalkState::Quit`] to stop the whole walk;
/// otherwise a failing subtree is skipped and its siblings keep going.
///
/// Directories whose base name is excluded are never entered, at any depth,
/// including the root itself. Symbolic links are not followed and, like
/// other special files, never reach `on_file`.
///
/// No ordering is guaranteed between visits. Returns once every scheduled
/// visit has finished.
pub fn walk_parallel<F, E>(options: &WalkOptions, on_file: F, on_error: E)
where
    F: Fn(PathBuf) -> WalkState + Sync,
    E: Fn(EngineError) -> WalkState + Sync,
{
    if options.excluded.excludes(&options.root) {
        log::debug!("root {} is excluded", options.root.display());
        return;
    }

    let mut builder = WalkBuilder::new(&options.root);
    builder
        .threads(options.threads)
        .standard_filters(false)
        .follow_links(false);

    let excluded = options.excluded.clone();
    builder.filter_entry(move |entry| {
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        !(is_dir && excluded.excludes(entry.path()))
    });

    let on_file = &on_file;
    let on_error = &on_error;
    builder.build_parallel().run(move || {
        Box::new(move |entry| match entry {
            Ok(entry) => match entry.file_type() {
                Some(ft) if ft.is_file() => on_file(entry.into_path()),
                Some(ft) if ft.is_dir() => {
                    log::debug!("entering {}", entry.path().display());
                    WalkState::Continue
                }
                _ => WalkState::Continue,
            },
            Err(err) => on_error(EngineError::Walk(err)),
        })
    });
}
