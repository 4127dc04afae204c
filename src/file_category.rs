/// File classification for destination subfolder naming.
///
/// Files are sorted by extension: a fixed set of image extensions collapses
/// into a single "Images" folder, every other extension becomes a folder of
/// its own, and extensionless files land in "Other_Files".
///
/// # Examples
///
/// ```
/// use homesort::file_category::{Category, CategoryMapper};
///
/// let mapper = CategoryMapper::default();
/// assert_eq!(mapper.categorize("photo.JPG"), Category::Image);
/// assert_eq!(mapper.categorize("report.pdf"), Category::Extension("pdf".to_string()));
/// assert_eq!(mapper.categorize("notes"), Category::Other);
/// ```
use std::collections::HashSet;
use std::path::Path;

/// Extensions grouped together under the "Images" folder.
const IMAGE_EXTENSIONS: [&str; 6] = ["jpeg", "jpg", "png", "gif", "heic", "webp"];

/// The destination category of a single file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// One of the recognized image extensions.
    Image,
    /// Any other extension; carries the lower-cased extension text without its dot.
    Extension(String),
    /// No extension at all.
    Other,
}

impl Category {
    /// Returns the destination subfolder name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use homesort::file_category::Category;
    ///
    /// assert_eq!(Category::Image.dir_name(), "Images");
    /// assert_eq!(Category::Extension("pdf".to_string()).dir_name(), "pdf");
    /// assert_eq!(Category::Other.dir_name(), "Other_Files");
    /// ```
    pub fn dir_name(&self) -> &str {
        match self {
            Category::Image => "Images",
            Category::Extension(ext) => ext,
            Category::Other => "Other_Files",
        }
    }
}

/// Maps file names to categories based on their extension.
#[derive(Debug, Clone)]
pub struct CategoryMapper {
    image_extensions: HashSet<&'static str>,
}

impl CategoryMapper {
    /// Creates a mapper with the standard image-extension set.
    pub fn new() -> Self {
        Self {
            image_extensions: IMAGE_EXTENSIONS.into_iter().collect(),
        }
    }

    /// Determines the category for a file name.
    ///
    /// The extension is taken after the final dot and compared lower-cased, so
    /// `photo.JPG` and `photo.jpg` classify identically. Dotfiles such as
    /// `.bashrc` and names with a trailing dot have no usable extension and
    /// fall into [`Category::Other`].
    ///
    /// # Examples
    ///
    /// ```
    /// use homesort::file_category::{Category, CategoryMapper};
    ///
    /// let mapper = CategoryMapper::default();
    /// assert_eq!(mapper.categorize("archive.tar.gz"), Category::Extension("gz".to_string()));
    /// assert_eq!(mapper.categorize(".bashrc"), Category::Other);
    /// ```
    pub fn categorize(&self, file_name: &str) -> Category {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty());

        match extension {
            Some(ext) => {
                let ext = ext.to_lowercase();
                if self.image_extensions.contains(ext.as_str()) {
                    Category::Image
                } else {
                    Category::Extension(ext)
                }
            }
            None => Category::Other,
        }
    }
}

impl Default for CategoryMapper {
    fn default() -> Self {
        Self::new()
    }
}
