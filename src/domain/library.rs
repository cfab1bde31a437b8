use crate::domain::ports::Describable;

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    title: String,
    author: String,
    price: f64,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            price,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }
}

impl Describable for Book {
    fn read(&self) -> String {
        format!("Reading Paper book: \"{}\" by {}", self.title, self.author)
    }
}

/// A book delivered as a file.
#[derive(Debug, Clone, PartialEq)]
pub struct EBook {
    book: Book,
    file_type: String,
}

impl EBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
        file_type: impl Into<String>,
    ) -> Self {
        Self {
            book: Book::new(title, author, price),
            file_type: file_type.into(),
        }
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut Book {
        &mut self.book
    }

    pub fn title(&self) -> &str {
        self.book.title()
    }

    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    pub fn set_file_type(&mut self, file_type: impl Into<String>) {
        self.file_type = file_type.into();
    }
}

impl Describable for EBook {
    fn read(&self) -> String {
        format!(
            "Read from Electronic Device: \"{}\" in {} format",
            self.book.title(),
            self.file_type
        )
    }
}

/// Walks through both publication kinds and returns the lines the demo prints.
pub fn book_demo() -> Vec<String> {
    let mut lines = Vec::new();

    let mut book = Book::new("The Alchemist", "Paulo Coelho", 14.99);
    lines.push(book.read());
    lines.push(format!(
        "Title: {}, Author: {}, Price: ${}",
        book.title(),
        book.author(),
        book.price()
    ));
    book.set_price(12.99);
    lines.push(format!("Updated Price: ${}", book.price()));

    lines.push("-----------".to_string());

    let mut ebook = EBook::new("Digital Fortress", "Dan Brown", 9.99, "PDF");
    lines.push(ebook.read());
    lines.push(format!(
        "Title: {}, File Type: {}",
        ebook.title(),
        ebook.file_type()
    ));
    ebook.set_file_type("ePub");
    lines.push(format!("Updated File Type: {}", ebook.file_type()));

    lines
}
