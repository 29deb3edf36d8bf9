use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;

use crate::errors::errors::{Error, ErrorImpl};
use crate::Position;

/// A value with exactly one of four kinds: a scalar string, a list of
/// values, a string-keyed map of values, or an opaque host object.
///
/// Grammar entry points build these bottom-up while consuming tokens,
/// and the finished tree is the parse result. Every accessor checks the
/// kind first and fails with `KindMismatch` when a value is used as
/// something it is not; kinds never coerce into each other.
///
/// Lists and maps own their children. Opaque values only carry the
/// handle's identity and a descriptive tag; the host object itself is
/// never copied.
#[derive(Clone)]
pub struct DynamicValue {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    Scalar(String),
    List(Vec<DynamicValue>),
    Map(HashMap<String, DynamicValue>),
    Opaque { tag: String, handle: Rc<dyn Any> },
}

impl DynamicValue {
    /// Creates an empty list value.
    pub fn new_list() -> DynamicValue {
        DynamicValue {
            repr: Repr::List(vec![]),
        }
    }

    /// Creates an empty map value.
    pub fn new_map() -> DynamicValue {
        DynamicValue {
            repr: Repr::Map(HashMap::new()),
        }
    }

    /// Wraps a host object without copying it.
    ///
    /// # Arguments
    /// * `tag` - Names the object's role, for diagnostics only
    /// * `handle` - The shared handle whose identity the value carries
    pub fn opaque(tag: impl Into<String>, handle: Rc<dyn Any>) -> DynamicValue {
        DynamicValue {
            repr: Repr::Opaque {
                tag: tag.into(),
                handle,
            },
        }
    }

    /// The kind held by this value: `"scalar"`, `"list"`, `"map"` or
    /// `"opaque"`.
    pub fn kind(&self) -> &'static str {
        match &self.repr {
            Repr::Scalar(_) => "scalar",
            Repr::List(_) => "list",
            Repr::Map(_) => "map",
            Repr::Opaque { .. } => "opaque",
        }
    }

    /// Borrows the scalar text.
    pub fn as_str(&self) -> Result<&str, Error> {
        match &self.repr {
            Repr::Scalar(text) => Ok(text),
            _ => Err(mismatch("scalar", self.kind())),
        }
    }

    /// Parses the scalar text as an integer, failing with a `Format`
    /// error when the text is not numeric.
    pub fn to_integer(&self) -> Result<i64, Error> {
        let text = self.as_str()?;
        text.parse().map_err(|_| {
            Error::new(
                ErrorImpl::Format {
                    value: text.to_string(),
                },
                Position::Unknown,
            )
        })
    }

    /// Borrows the list element at `index`, failing with `OutOfRange`
    /// past the end.
    pub fn get_index(&self, index: usize) -> Result<&DynamicValue, Error> {
        let items = self.items()?;
        let available = items.len();
        items.get(index).ok_or_else(|| out_of_range(index, available))
    }

    /// Replaces the list element at `index`, failing with `OutOfRange`
    /// past the end.
    pub fn set_index(&mut self, index: usize, value: DynamicValue) -> Result<(), Error> {
        let items = self.items_mut()?;
        let available = items.len();
        match items.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(out_of_range(index, available)),
        }
    }

    /// Appends a value to the list.
    pub fn push(&mut self, value: DynamicValue) -> Result<(), Error> {
        self.items_mut()?.push(value);
        Ok(())
    }

    /// Borrows the list elements.
    pub fn items(&self) -> Result<&[DynamicValue], Error> {
        match &self.repr {
            Repr::List(items) => Ok(items),
            _ => Err(mismatch("list", self.kind())),
        }
    }

    /// Projects every list element to its scalar text. Fails with
    /// `KindMismatch` when any element is not itself a scalar.
    pub fn to_strings(&self) -> Result<Vec<String>, Error> {
        let mut strings = vec![];
        for item in self.items()? {
            strings.push(item.as_str()?.to_string());
        }
        Ok(strings)
    }

    /// Projects every list element to an integer, applying the scalar
    /// conversion element by element.
    pub fn to_integers(&self) -> Result<Vec<i64>, Error> {
        let mut integers = vec![];
        for item in self.items()? {
            integers.push(item.to_integer()?);
        }
        Ok(integers)
    }

    /// Borrows the value under `key`, failing with `MissingKey` when the
    /// map does not hold it. There is no default.
    pub fn get_key(&self, key: &str) -> Result<&DynamicValue, Error> {
        match self.entries()?.get(key) {
            Some(value) => Ok(value),
            None => Err(Error::new(
                ErrorImpl::MissingKey {
                    key: key.to_string(),
                },
                Position::Unknown,
            )),
        }
    }

    /// Inserts or replaces the value under `key`.
    pub fn set_key(&mut self, key: impl Into<String>, value: DynamicValue) -> Result<(), Error> {
        self.entries_mut()?.insert(key.into(), value);
        Ok(())
    }

    /// Checks whether the map holds `key`.
    pub fn contains_key(&self, key: &str) -> Result<bool, Error> {
        Ok(self.entries()?.contains_key(key))
    }

    /// Borrows the map entries.
    pub fn entries(&self) -> Result<&HashMap<String, DynamicValue>, Error> {
        match &self.repr {
            Repr::Map(entries) => Ok(entries),
            _ => Err(mismatch("map", self.kind())),
        }
    }

    /// Projects every map value to its scalar text, keeping the keys.
    pub fn to_string_map(&self) -> Result<HashMap<String, String>, Error> {
        let mut strings = HashMap::new();
        for (key, value) in self.entries()? {
            strings.insert(key.clone(), value.as_str()?.to_string());
        }
        Ok(strings)
    }

    /// Returns the held handle unchanged.
    pub fn as_opaque(&self) -> Result<Rc<dyn Any>, Error> {
        match &self.repr {
            Repr::Opaque { handle, .. } => Ok(Rc::clone(handle)),
            _ => Err(mismatch("opaque", self.kind())),
        }
    }

    /// The tag the opaque value was created with.
    pub fn opaque_tag(&self) -> Result<&str, Error> {
        match &self.repr {
            Repr::Opaque { tag, .. } => Ok(tag),
            _ => Err(mismatch("opaque", self.kind())),
        }
    }

    fn items_mut(&mut self) -> Result<&mut Vec<DynamicValue>, Error> {
        let actual = self.kind();
        match &mut self.repr {
            Repr::List(items) => Ok(items),
            _ => Err(mismatch("list", actual)),
        }
    }

    fn entries_mut(&mut self) -> Result<&mut HashMap<String, DynamicValue>, Error> {
        let actual = self.kind();
        match &mut self.repr {
            Repr::Map(entries) => Ok(entries),
            _ => Err(mismatch("map", actual)),
        }
    }
}

impl From<&str> for DynamicValue {
    fn from(text: &str) -> DynamicValue {
        DynamicValue {
            repr: Repr::Scalar(text.to_string()),
        }
    }
}

impl From<String> for DynamicValue {
    fn from(text: String) -> DynamicValue {
        DynamicValue {
            repr: Repr::Scalar(text),
        }
    }
}

impl From<i64> for DynamicValue {
    fn from(value: i64) -> DynamicValue {
        DynamicValue {
            repr: Repr::Scalar(value.to_string()),
        }
    }
}

impl From<Vec<DynamicValue>> for DynamicValue {
    fn from(items: Vec<DynamicValue>) -> DynamicValue {
        DynamicValue {
            repr: Repr::List(items),
        }
    }
}

impl From<Vec<String>> for DynamicValue {
    fn from(items: Vec<String>) -> DynamicValue {
        DynamicValue {
            repr: Repr::List(items.into_iter().map(DynamicValue::from).collect()),
        }
    }
}

impl From<Vec<i64>> for DynamicValue {
    fn from(items: Vec<i64>) -> DynamicValue {
        DynamicValue {
            repr: Repr::List(items.into_iter().map(DynamicValue::from).collect()),
        }
    }
}

impl From<HashMap<String, DynamicValue>> for DynamicValue {
    fn from(entries: HashMap<String, DynamicValue>) -> DynamicValue {
        DynamicValue {
            repr: Repr::Map(entries),
        }
    }
}

impl From<HashMap<String, String>> for DynamicValue {
    fn from(entries: HashMap<String, String>) -> DynamicValue {
        DynamicValue {
            repr: Repr::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, DynamicValue::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Scalars, lists and maps compare structurally; opaque values compare
/// by handle identity.
impl PartialEq for DynamicValue {
    fn eq(&self, other: &DynamicValue) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Scalar(a), Repr::Scalar(b)) => a == b,
            (Repr::List(a), Repr::List(b)) => a == b,
            (Repr::Map(a), Repr::Map(b)) => a == b,
            (Repr::Opaque { handle: a, .. }, Repr::Opaque { handle: b, .. }) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl std::fmt::Debug for DynamicValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.repr {
            Repr::Scalar(text) => f.debug_tuple("Scalar").field(text).finish(),
            Repr::List(items) => f.debug_tuple("List").field(items).finish(),
            Repr::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Repr::Opaque { tag, .. } => f.debug_tuple("Opaque").field(tag).finish(),
        }
    }
}

fn mismatch(expected: &'static str, actual: &'static str) -> Error {
    Error::new(
        ErrorImpl::KindMismatch { expected, actual },
        Position::Unknown,
    )
}

fn out_of_range(requested: usize, available: usize) -> Error {
    Error::new(
        ErrorImpl::OutOfRange {
            requested,
            available,
        },
        Position::Unknown,
    )
}
