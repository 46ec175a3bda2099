//! Output layout for generated files.
//!
//! | Template | Accent | Output |
//! |----------|--------|--------|
//! | file `t.ext` | none | `<out>/<id>.ext` |
//! | file `t.ext` | `A` | `<out>/<id>/<id>-A.ext` |
//! | directory `D` | none | `<out>/<id>/<path under D>` |
//! | directory `D` | `A` | `<out>/A/<id>/<path under D>` |
//!
//! Reverse generation writes `<out>/template.ext`.

use std::path::{Path, PathBuf};

use bloom_render::Accent;

use super::walk::DEFAULT_TEMPLATE_STEM;

/// Where the template files came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateRoot<'a> {
    /// A single template file.
    File,
    /// A directory; outputs mirror the layout below it.
    Directory(&'a Path),
}

/// `.ext` of `path`, or an empty string.
fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Path of the theme rendered from `file` for one variant and accent.
pub fn theme_path(
    output: &Path,
    root: TemplateRoot<'_>,
    file: &Path,
    variant_id: &str,
    accent: Option<Accent>,
) -> PathBuf {
    match root {
        TemplateRoot::Directory(dir) => {
            let relative = file
                .strip_prefix(dir)
                .ok()
                .map(Path::to_path_buf)
                .or_else(|| file.file_name().map(PathBuf::from))
                .unwrap_or_else(|| file.to_path_buf());
            let base = match accent {
                Some(accent) => output.join(accent.name()).join(variant_id),
                None => output.join(variant_id),
            };
            base.join(relative)
        }
        TemplateRoot::File => {
            let ext = dotted_extension(file);
            match accent {
                Some(accent) => output
                    .join(variant_id)
                    .join(format!("{variant_id}-{}{ext}", accent.name())),
                None => output.join(format!("{variant_id}{ext}")),
            }
        }
    }
}

/// Path of the template extracted from theme `file`.
pub fn template_path(output: &Path, file: &Path) -> PathBuf {
    output.join(format!("{DEFAULT_TEMPLATE_STEM}{}", dotted_extension(file)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_without_accent() {
        let path = theme_path(
            Path::new("dist"),
            TemplateRoot::File,
            Path::new("src/template.json"),
            "rose-pine-moon",
            None,
        );
        assert_eq!(path, PathBuf::from("dist/rose-pine-moon.json"));
    }

    #[test]
    fn test_file_with_accent() {
        let path = theme_path(
            Path::new("dist"),
            TemplateRoot::File,
            Path::new("template.toml"),
            "rose-pine",
            Some(Accent::Iris),
        );
        assert_eq!(path, PathBuf::from("dist/rose-pine/rose-pine-iris.toml"));
    }

    #[test]
    fn test_file_without_extension() {
        let path = theme_path(
            Path::new("out"),
            TemplateRoot::File,
            Path::new("template"),
            "rose-pine-dawn",
            None,
        );
        assert_eq!(path, PathBuf::from("out/rose-pine-dawn"));
    }

    #[test]
    fn test_directory_without_accent() {
        let path = theme_path(
            Path::new("dist"),
            TemplateRoot::Directory(Path::new("templates")),
            Path::new("templates/colors/ui.conf"),
            "rose-pine-dawn",
            None,
        );
        assert_eq!(path, PathBuf::from("dist/rose-pine-dawn/colors/ui.conf"));
    }

    #[test]
    fn test_directory_with_accent() {
        let path = theme_path(
            Path::new("dist"),
            TemplateRoot::Directory(Path::new("templates")),
            Path::new("templates/ui.conf"),
            "rose-pine",
            Some(Accent::Gold),
        );
        assert_eq!(path, PathBuf::from("dist/gold/rose-pine/ui.conf"));
    }

    #[test]
    fn test_template_path_keeps_extension() {
        assert_eq!(
            template_path(Path::new("dist"), Path::new("themes/rose-pine.yaml")),
            PathBuf::from("dist/template.yaml")
        );
        assert_eq!(
            template_path(Path::new("."), Path::new("colors")),
            PathBuf::from("./template")
        );
    }
}
