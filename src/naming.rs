use std::path::{Path, PathBuf};

/// Longest a single sanitized title may be within a file name. Three parts plus the
/// slide suffix stay well under the 255 byte limit of common filesystems.
pub const MAX_NAME_PART: usize = 64;

/// Strip everything but ASCII letters, digits and whitespace, so titles can be used
/// in file names
pub fn sanitize(title: &str) -> String {
    title
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || ch.is_whitespace())
        .collect()
}

/// [sanitize] `title` and cut it to at most [MAX_NAME_PART] characters
fn name_part(title: &str) -> String {
    let mut part = sanitize(title);
    // sanitized text is ASCII, so every char boundary is a byte boundary
    part.truncate(MAX_NAME_PART);
    part
}

/// Directory a lesson's generated pictures live in, relative to the picture root
pub fn lesson_dir_name(unit: &str, week: &str, lesson: &str) -> String {
    format!("{}_{}_{}", name_part(unit), name_part(week), name_part(lesson))
}

/// File name of the picture generated for the `index`th slide (1-based)
pub fn picture_file_name(index: usize) -> String {
    format!("image_{index}.png")
}

/// File name of the `index`th composed slide (1-based) of a lesson
pub fn slide_file_name(unit: &str, week: &str, lesson: &str, index: usize) -> String {
    format!("{}_slide_{index}.png", lesson_dir_name(unit, week, lesson))
}

/// Compact sequential names of the form `TT_UU_LL_SS.png` (topic, unit, lesson,
/// slide). Slides count up to `slides_per_lesson` before moving to the next lesson,
/// and lessons count up to `lessons_per_unit` before moving to the next unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialNames {
    pub topic: u32,
    pub slides_per_lesson: u32,
    pub lessons_per_unit: u32,
    unit: u32,
    lesson: u32,
    slide: u32,
}

impl SequentialNames {
    pub fn new(topic: u32, slides_per_lesson: u32, lessons_per_unit: u32) -> SequentialNames {
        SequentialNames {
            topic,
            slides_per_lesson: slides_per_lesson.max(1),
            lessons_per_unit: lessons_per_unit.max(1),
            unit: 1,
            lesson: 1,
            slide: 1,
        }
    }
}

impl Default for SequentialNames {
    fn default() -> Self {
        SequentialNames::new(1, 5, 5)
    }
}

impl Iterator for SequentialNames {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let name = format!(
            "{:02}_{:02}_{:02}_{:02}.png",
            self.topic, self.unit, self.lesson, self.slide
        );

        self.slide += 1;
        if self.slide > self.slides_per_lesson {
            self.slide = 1;
            self.lesson += 1;
        }
        if self.lesson > self.lessons_per_unit {
            self.lesson = 1;
            self.unit += 1;
        }

        Some(name)
    }
}

/// Rename every `.png` in `dir`, in sorted order, to the next name from `names`.
///
/// Files are first moved to temporary names so that a target which matches a file
/// not yet renamed is never overwritten. Returns the `(from, to)` pairs applied.
///
/// If any rename fails, the files already moved are put back under their original
/// names before the error is returned.
pub fn rename_sequential(
    dir: &Path,
    names: SequentialNames,
) -> std::io::Result<Vec<(PathBuf, PathBuf)>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "png"))
        .collect();
    files.sort();

    let mut staged = Vec::with_capacity(files.len());
    for (i, file) in files.iter().enumerate() {
        let temp = dir.join(format!(".renaming-{i}.tmp"));
        if let Err(err) = std::fs::rename(file, &temp) {
            restore(staged.iter().zip(&files));
            return Err(err);
        }
        staged.push(temp);
    }

    let mut renamed: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(files.len());
    for (i, name) in (0..files.len()).zip(names) {
        let to = dir.join(name);
        if let Err(err) = std::fs::rename(&staged[i], &to) {
            restore(renamed.iter().map(|(from, to)| (to, from)));
            restore(staged[i..].iter().zip(&files[i..]));
            return Err(err);
        }
        log::info!("renamed {} to {}", files[i].display(), to.display());
        renamed.push((files[i].clone(), to));
    }

    Ok(renamed)
}

/// Move each `(current, original)` pair back, logging anything that cannot be
fn restore<'p>(moves: impl Iterator<Item = (&'p PathBuf, &'p PathBuf)>) {
    for (current, original) in moves {
        if let Err(err) = std::fs::rename(current, original) {
            log::error!(
                "could not restore {} to {}: {err}",
                current.display(),
                original.display()
            );
        }
    }
}
