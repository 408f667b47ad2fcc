pub trait Indexable {
  fn id(&self) -> &str;
}

/// An entity persisted as an id -> record mapping entry.
///
/// The record holds every field except the id, which becomes the mapping key.
pub trait Entity: Indexable + Sized {
  type Record: serde::Serialize + serde::de::DeserializeOwned;

  fn to_record(&self) -> Self::Record;
  fn from_record(id: String, record: Self::Record) -> Self;
}
