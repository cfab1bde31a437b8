use crate::utils::error::{CourseError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price_label: String,
    pub emoji: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub title: String,
    /// ARGB color of the promotion card.
    pub color: u32,
    pub emoji: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub name: String,
    pub image_tag: String,
    pub price: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub icon: String,
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub initials: String,
    pub name: String,
    pub email: String,
    pub entries: Vec<ProfileEntry>,
}

impl GroceryItem {
    /// Encodes the item as `name, image_tag, price, description`.
    ///
    /// Strings are a little-endian `u32` byte length followed by UTF-8 bytes,
    /// the price is a little-endian `f64`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(
            16 + self.name.len() + self.image_tag.len() + 8 + self.description.len(),
        );
        write_string(&mut buf, &self.name);
        write_string(&mut buf, &self.image_tag);
        buf.extend_from_slice(&self.price.to_le_bytes());
        write_string(&mut buf, &self.description);
        buf
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = ByteReader { bytes, pos: 0 };
        let name = reader.read_string("name")?;
        let image_tag = reader.read_string("image_tag")?;
        let price = f64::from_le_bytes(reader.read_array::<8>("price")?);
        let description = reader.read_string("description")?;

        if reader.pos != bytes.len() {
            return Err(CourseError::codec(format!(
                "{} trailing bytes after grocery item",
                bytes.len() - reader.pos
            )));
        }

        Ok(Self {
            name,
            image_tag,
            price,
            description,
        })
    }
}

fn write_string(buf: &mut Vec<u8>, value: &str) {
    buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
    buf.extend_from_slice(value.as_bytes());
}

struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn take(&mut self, len: usize, field: &str) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.bytes.len())
            .ok_or_else(|| CourseError::codec(format!("truncated input while reading {}", field)))?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_array<const N: usize>(&mut self, field: &str) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N, field)?);
        Ok(out)
    }

    fn read_string(&mut self, field: &str) -> Result<String> {
        let len = u32::from_le_bytes(self.read_array::<4>(field)?) as usize;
        let raw = self.take(len, field)?;
        String::from_utf8(raw.to_vec())
            .map_err(|_| CourseError::codec(format!("{} is not valid UTF-8", field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> GroceryItem {
        GroceryItem {
            name: "Apple".to_string(),
            image_tag: "🍎".to_string(),
            price: 0.99,
            description: "Crisp and sweet.".to_string(),
        }
    }

    #[test]
    fn test_layout_is_fixed_order() {
        let bytes = apple().to_bytes();
        assert_eq!(&bytes[0..4], &5u32.to_le_bytes());
        assert_eq!(&bytes[4..9], b"Apple");
        // emoji is four UTF-8 bytes
        assert_eq!(&bytes[9..13], &4u32.to_le_bytes());
        assert_eq!(&bytes[17..25], &0.99f64.to_le_bytes());
    }

    #[test]
    fn test_decode_restores_item() {
        let item = apple();
        assert_eq!(GroceryItem::from_bytes(&item.to_bytes()).unwrap(), item);
    }

    #[test]
    fn test_truncated_input_is_rejected() {
        let bytes = apple().to_bytes();
        let err = GroceryItem::from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(err.to_string().contains("description"));
        assert!(GroceryItem::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_trailing_bytes_are_rejected() {
        let mut bytes = apple().to_bytes();
        bytes.push(0);
        assert!(GroceryItem::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&[0xff, 0xfe]);
        let err = GroceryItem::from_bytes(&bytes).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }
}
