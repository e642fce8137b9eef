mod rect;

pub use self::rect::BoundingBox;
