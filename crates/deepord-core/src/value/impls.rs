//! `Inspect` implementations for std, chrono, and crate types.

use crate::{
    types::{Complex32, Complex64, Nil, Opaque},
    value::{Collection, Inspect, Record, Scalar, Sequence, Value},
};
use chrono::{DateTime, NaiveDateTime, TimeZone};
use std::{
    any::Any,
    collections::{BTreeMap, HashMap, VecDeque},
    hash::{BuildHasher, Hash},
    rc::Rc,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

const NANOS_PER_SECOND: i128 = 1_000_000_000;

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

macro_rules! impl_inspect_scalar {
    ( $( $ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl Inspect for $ty {
                fn inspect(&self) -> Value<'_> {
                    Value::Scalar(Scalar::$variant(*self))
                }
            }
        )*
    };
}

impl_inspect_scalar!(
    bool => Bool,
    char => Char,
    Complex32 => Complex32,
    Complex64 => Complex64,
    f32 => Float32,
    f64 => Float64,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    i128 => Int128,
    isize => Isize,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    u128 => Uint128,
    usize => Usize,
);

impl Inspect for String {
    fn inspect(&self) -> Value<'_> {
        Value::Scalar(Scalar::Text(self.as_str()))
    }
}

impl Inspect for &'static str {
    fn inspect(&self) -> Value<'_> {
        Value::Scalar(Scalar::Text(self))
    }
}

impl Inspect for Box<str> {
    fn inspect(&self) -> Value<'_> {
        Value::Scalar(Scalar::Text(self))
    }
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

impl Inspect for SystemTime {
    fn inspect(&self) -> Value<'_> {
        Value::Scalar(Scalar::Timestamp(system_time_nanos(self)))
    }
}

impl<Tz: TimeZone + 'static> Inspect for DateTime<Tz> {
    fn inspect(&self) -> Value<'_> {
        Value::Scalar(Scalar::Timestamp(epoch_nanos(
            self.timestamp(),
            self.timestamp_subsec_nanos(),
        )))
    }
}

impl Inspect for NaiveDateTime {
    fn inspect(&self) -> Value<'_> {
        let utc = self.and_utc();

        Value::Scalar(Scalar::Timestamp(epoch_nanos(
            utc.timestamp(),
            utc.timestamp_subsec_nanos(),
        )))
    }
}

fn epoch_nanos(seconds: i64, subsec_nanos: u32) -> i128 {
    i128::from(seconds) * NANOS_PER_SECOND + i128::from(subsec_nanos)
}

fn system_time_nanos(time: &SystemTime) -> i128 {
    // durations beyond i128 nanoseconds saturate
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i128::try_from(after.as_nanos()).unwrap_or(i128::MAX),
        Err(before) => i128::try_from(before.duration().as_nanos()).map_or(i128::MIN, |n| -n),
    }
}

// ---------------------------------------------------------------------------
// Nil, unit, opaque
// ---------------------------------------------------------------------------

impl Inspect for Nil {
    fn inspect(&self) -> Value<'_> {
        Value::Nil
    }
}

impl Inspect for () {
    fn inspect(&self) -> Value<'_> {
        Value::Record(self)
    }
}

impl Record for () {
    fn field_count(&self) -> usize {
        0
    }

    fn field(&self, _index: usize) -> Option<&dyn Inspect> {
        None
    }
}

impl<T: PartialEq + 'static> Inspect for Opaque<T> {
    fn inspect(&self) -> Value<'_> {
        Value::Opaque(&self.0)
    }
}

// ---------------------------------------------------------------------------
// References
// ---------------------------------------------------------------------------

impl<T: Inspect> Inspect for Option<T> {
    fn inspect(&self) -> Value<'_> {
        match self {
            Some(target) => Value::Reference(target),
            None => Value::Nil,
        }
    }
}

impl<T: Inspect> Inspect for Box<T> {
    fn inspect(&self) -> Value<'_> {
        Value::Reference(&**self)
    }
}

impl<T: Inspect> Inspect for Rc<T> {
    fn inspect(&self) -> Value<'_> {
        Value::Reference(&**self)
    }
}

impl<T: Inspect> Inspect for Arc<T> {
    fn inspect(&self) -> Value<'_> {
        Value::Reference(&**self)
    }
}

impl<T: Inspect> Inspect for &'static T {
    fn inspect(&self) -> Value<'_> {
        Value::Reference(*self)
    }
}

impl Inspect for Box<dyn Inspect> {
    fn inspect(&self) -> Value<'_> {
        Value::Dynamic(&**self)
    }
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn inspect(&self) -> Value<'_> {
        Value::Array(self)
    }
}

impl<T: Inspect, const N: usize> Sequence for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn element(&self, index: usize) -> Option<&dyn Inspect> {
        self.get(index).map(|element| element as &dyn Inspect)
    }

    fn as_bytes(&self) -> Option<&[u8]> {
        (self as &dyn Any)
            .downcast_ref::<[u8; N]>()
            .map(<[u8; N]>::as_slice)
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn inspect(&self) -> Value<'_> {
        Value::List(self)
    }
}

impl<T: Inspect> Sequence for Vec<T> {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn element(&self, index: usize) -> Option<&dyn Inspect> {
        self.get(index).map(|element| element as &dyn Inspect)
    }

    fn as_bytes(&self) -> Option<&[u8]> {
        (self as &dyn Any)
            .downcast_ref::<Vec<u8>>()
            .map(Vec::as_slice)
    }
}

impl<T: Inspect> Inspect for Box<[T]> {
    fn inspect(&self) -> Value<'_> {
        Value::List(self)
    }
}

impl<T: Inspect> Sequence for Box<[T]> {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn element(&self, index: usize) -> Option<&dyn Inspect> {
        self.get(index).map(|element| element as &dyn Inspect)
    }

    fn as_bytes(&self) -> Option<&[u8]> {
        (self as &dyn Any)
            .downcast_ref::<Box<[u8]>>()
            .map(|bytes| &**bytes)
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn inspect(&self) -> Value<'_> {
        Value::List(self)
    }
}

impl<T: Inspect> Sequence for VecDeque<T> {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn element(&self, index: usize) -> Option<&dyn Inspect> {
        self.get(index).map(|element| element as &dyn Inspect)
    }
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

impl<K, V, S> Inspect for HashMap<K, V, S>
where
    K: Inspect + Eq + Hash,
    V: Inspect,
    S: BuildHasher + 'static,
{
    fn inspect(&self) -> Value<'_> {
        Value::Map(self)
    }
}

impl<K, V, S> Collection for HashMap<K, V, S>
where
    K: Inspect + Eq + Hash,
    V: Inspect,
    S: BuildHasher + 'static,
{
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Inspect, &dyn Inspect)> + '_> {
        Box::new(
            self.iter()
                .map(|(key, value)| (key as &dyn Inspect, value as &dyn Inspect)),
        )
    }

    fn lookup(&self, key: &dyn Inspect) -> Option<&dyn Inspect> {
        let key: &dyn Any = key;

        key.downcast_ref::<K>()
            .and_then(|key| self.get(key))
            .map(|value| value as &dyn Inspect)
    }

    fn is_unordered(&self) -> bool {
        true
    }
}

impl<K, V> Inspect for BTreeMap<K, V>
where
    K: Inspect + Ord,
    V: Inspect,
{
    fn inspect(&self) -> Value<'_> {
        Value::Map(self)
    }
}

impl<K, V> Collection for BTreeMap<K, V>
where
    K: Inspect + Ord,
    V: Inspect,
{
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Inspect, &dyn Inspect)> + '_> {
        Box::new(
            self.iter()
                .map(|(key, value)| (key as &dyn Inspect, value as &dyn Inspect)),
        )
    }

    fn lookup(&self, key: &dyn Inspect) -> Option<&dyn Inspect> {
        let key: &dyn Any = key;

        key.downcast_ref::<K>()
            .and_then(|key| self.get(key))
            .map(|value| value as &dyn Inspect)
    }
}

// ---------------------------------------------------------------------------
// Tuples (records with positional fields)
// ---------------------------------------------------------------------------

macro_rules! impl_inspect_tuple {
    ( $count:literal => $( $index:tt : $name:ident ),+ ) => {
        impl<$( $name: Inspect ),+> Inspect for ( $( $name, )+ ) {
            fn inspect(&self) -> Value<'_> {
                Value::Record(self)
            }
        }

        impl<$( $name: Inspect ),+> Record for ( $( $name, )+ ) {
            fn field_count(&self) -> usize {
                $count
            }

            fn field(&self, index: usize) -> Option<&dyn Inspect> {
                match index {
                    $( $index => Some(&self.$index as &dyn Inspect), )+
                    _ => None,
                }
            }
        }
    };
}

impl_inspect_tuple!(1 => 0: A);
impl_inspect_tuple!(2 => 0: A, 1: B);
impl_inspect_tuple!(3 => 0: A, 1: B, 2: C);
impl_inspect_tuple!(4 => 0: A, 1: B, 2: C, 3: D);
impl_inspect_tuple!(5 => 0: A, 1: B, 2: C, 3: D, 4: E);
impl_inspect_tuple!(6 => 0: A, 1: B, 2: C, 3: D, 4: E, 5: F);
impl_inspect_tuple!(7 => 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G);
impl_inspect_tuple!(8 => 0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H);
