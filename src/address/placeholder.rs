//! Required sections and the placeholder document written for them.

use crate::config::RelinkConfig;
use crate::utils::title::title_from_slug;

/// Top-level content sections guaranteed to hold an index document.
#[derive(Debug, Clone, Default)]
pub struct RequiredPaths {
    entries: Vec<Vec<String>>,
}

impl RequiredPaths {
    pub fn new<S: AsRef<str>>(paths: impl IntoIterator<Item = S>) -> Self {
        let entries = paths
            .into_iter()
            .map(|p| {
                p.as_ref()
                    .trim_matches('/')
                    .split('/')
                    .filter(|seg| !seg.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|segs| !segs.is_empty())
            .collect();
        Self { entries }
    }

    pub fn from_config(config: &RelinkConfig) -> Self {
        Self::new(config.provision.required_paths())
    }

    /// Each entry as a `a/b` string.
    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|segs| segs.join("/"))
    }

    /// Check if the directory of `url_path` lies under a required entry.
    ///
    /// `resources/calculators/index.html` is covered by `resources/calculators`,
    /// `health/diet/index.html` by `health`. Paths with `..` segments never
    /// are, so provisioning cannot escape the output root.
    pub fn covers(&self, url_path: &str) -> bool {
        let mut segments: Vec<&str> = url_path.split('/').filter(|s| !s.is_empty()).collect();
        segments.pop();

        if segments.iter().any(|s| *s == ".." || *s == ".") {
            return false;
        }

        self.entries.iter().any(|entry| {
            entry.len() <= segments.len()
                && entry.iter().zip(&segments).all(|(a, b)| a == b)
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A document to create because a required section lacks one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Target file, relative to the output root.
    pub url_path: String,
    /// Visible title.
    pub title: String,
}

impl Placeholder {
    /// Placeholder for `url_path`, titled after its last meaningful segment.
    ///
    /// For `<dir>/<index_file>` that is the directory name, otherwise the
    /// file stem: `guides/success-stories/index.html` -> "Success Stories",
    /// `legal/terms.html` -> "Terms".
    pub fn for_url(url_path: &str, index_file: &str) -> Self {
        let mut segments = url_path.rsplit('/').filter(|s| !s.is_empty());
        let file = segments.next().unwrap_or_default();

        let slug = if file == index_file {
            segments.next().unwrap_or("home")
        } else {
            file.rsplit_once('.').map_or(file, |(stem, _)| stem)
        };

        Self {
            url_path: url_path.to_string(),
            title: title_from_slug(slug),
        }
    }

    /// Render the placeholder page.
    pub fn render(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css" rel="stylesheet" />
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-100">
    <div class="container mx-auto px-4 py-8">
        <h1 class="text-3xl font-bold mb-6">{title}</h1>
        <p class="text-gray-600">Content coming soon...</p>
    </div>
</body>
</html>
"#,
            title = self.title
        )
    }
}
