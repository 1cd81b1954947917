//! Lightbox state for image galleries (event gallery, scrapbook).

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Image list plus the index currently enlarged, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    images: Vec<String>,
    open: Option<usize>,
}

impl Lightbox {
    pub fn new(images: Vec<String>) -> Self {
        Self { images, open: None }
    }

    /// Replace the image list. An open index that no longer exists closes the lightbox.
    pub fn set_images(&mut self, images: Vec<String>) {
        self.images = images;
        if self.open.is_some_and(|i| i >= self.images.len()) {
            self.open = None;
        }
    }

    pub fn push(&mut self, url: String) {
        self.images.push(url);
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Out-of-range indexes are ignored.
    pub fn open(&mut self, index: usize) {
        if index < self.images.len() {
            self.open = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn index(&self) -> Option<usize> {
        self.open
    }

    pub fn current(&self) -> Option<&str> {
        self.open.and_then(|i| self.images.get(i)).map(String::as_str)
    }

    pub fn next(&mut self) {
        let len = self.images.len();
        if let Some(i) = self.open.as_mut() {
            *i = (*i + 1) % len;
        }
    }

    pub fn prev(&mut self) {
        let len = self.images.len();
        if let Some(i) = self.open.as_mut() {
            *i = (*i + len - 1) % len;
        }
    }

    /// Apply a keyboard key (`Escape`, `ArrowLeft`, `ArrowRight`). Returns
    /// whether the key was consumed; keys are ignored while closed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            "Escape" => self.close(),
            "ArrowRight" => self.next(),
            "ArrowLeft" => self.prev(),
            _ => return false,
        }
        true
    }

    /// "3 / 7" style position label.
    pub fn position_label(&self) -> Option<String> {
        self.open.map(|i| format!("{} / {}", i + 1, self.images.len()))
    }
}
