//! 표의 실수 셀 직렬화 규칙.
//!
//! JSON은 inf/NaN을 표현하지 못해 null로 쓰므로, 비유한 값은 `"inf"`, `"-inf"`, `"NaN"`
//! 문자열로 기록한다. null은 미정의 셀(`None`)에만 쓴다.
//!
//! `#[serde(with = "crate::non_finite")]`는 `f64`, `#[serde(with = "crate::non_finite::option")]`는
//! `Option<f64>` 필드에 붙인다.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

const INF: &str = "inf";
const NEG_INF: &str = "-inf";
const NAN: &str = "NaN";

/// 비유한 값을 태그 문자열로 직렬화하는 래퍼.
#[derive(Debug, Clone, Copy)]
struct Cell(f64);

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.is_nan() {
            serializer.serialize_str(NAN)
        } else if v == f64::INFINITY {
            serializer.serialize_str(INF)
        } else if v == f64::NEG_INFINITY {
            serializer.serialize_str(NEG_INF)
        } else {
            serializer.serialize_f64(v)
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawCell {
    Number(f64),
    Tag(String),
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawCell::deserialize(deserializer)? {
            RawCell::Number(v) => Ok(Cell(v)),
            RawCell::Tag(tag) => match tag.as_str() {
                INF => Ok(Cell(f64::INFINITY)),
                NEG_INF => Ok(Cell(f64::NEG_INFINITY)),
                NAN => Ok(Cell(f64::NAN)),
                other => Err(de::Error::custom(format!(
                    "숫자 또는 \"{INF}\"/\"{NEG_INF}\"/\"{NAN}\"이어야 합니다: {other:?}"
                ))),
            },
        }
    }
}

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    Cell(*value).serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Cell::deserialize(deserializer).map(|c| c.0)
}

/// `Option<f64>` 셀. `None`만 null로 기록한다.
pub mod option {
    use super::Cell;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_some(&Cell(*v)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        Option::<Cell>::deserialize(deserializer).map(|c| c.map(|c| c.0))
    }
}
