//! 명령 트리 도메인 모델.
//! 서술자/인자 슬롯/값 타입과 문자열 → 값 변환 전략을 외부 의존성 없이 정의한다.

use std::fmt;

/// 라우팅 가능한 노드(명령/하위 명령)의 이름과 설명.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
}

impl CommandDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// 값 변환 전략 태그. 닫힌 집합이며 확장은 variant 추가로 한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Integer,
    Float,
    Boolean,
    /// 열거형 이름 집합(대소문자 구분 일치).
    Choice(&'static [&'static str]),
}

impl ValueKind {
    /// 원시 토큰을 값으로 변환한다. 실패 시 기대 형식 설명을 돌려준다.
    pub fn coerce(self, raw: &str) -> Result<Value, String> {
        match self {
            Self::Text => Ok(Value::Text(raw.to_string())),
            Self::Integer => raw
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| self.expectation()),
            Self::Float => raw
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| self.expectation()),
            Self::Boolean => {
                if raw.eq_ignore_ascii_case("true") {
                    Ok(Value::Boolean(true))
                } else if raw.eq_ignore_ascii_case("false") {
                    Ok(Value::Boolean(false))
                } else {
                    Err(self.expectation())
                }
            }
            Self::Choice(names) => names
                .iter()
                .copied()
                .find(|name| *name == raw)
                .map(Value::Choice)
                .ok_or_else(|| self.expectation()),
        }
    }

    /// 오류 메시지용 기대 형식.
    pub fn expectation(self) -> String {
        match self {
            Self::Text => "text".to_string(),
            Self::Integer => "an integer".to_string(),
            Self::Float => "a number".to_string(),
            Self::Boolean => "true or false".to_string(),
            Self::Choice(names) => format!("one of {}", names.join(", ")),
        }
    }

    /// 도움말에 표시할 값 자리표시자.
    pub fn placeholder(self) -> String {
        match self {
            Self::Text => "text".to_string(),
            Self::Integer => "integer".to_string(),
            Self::Float => "number".to_string(),
            Self::Boolean => "true|false".to_string(),
            Self::Choice(names) => names.join("|"),
        }
    }
}

/// 변환이 끝난 인자 값.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Choice(&'static str),
}

impl Value {
    pub fn kind_matches(&self, kind: ValueKind) -> bool {
        match (self, kind) {
            (Self::Text(_), ValueKind::Text)
            | (Self::Integer(_), ValueKind::Integer)
            | (Self::Float(_), ValueKind::Float)
            | (Self::Boolean(_), ValueKind::Boolean) => true,
            (Self::Choice(name), ValueKind::Choice(names)) => names.contains(name),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(v) => f.write_str(v),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Choice(v) => f.write_str(v),
        }
    }
}

/// 메서드 파라미터 하나의 바인딩 정의.
/// 기본값 유무가 위치 인자/이름 옵션 여부를 결정한다.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentSlot {
    pub parameter_name: String,
    pub description: String,
    pub kind: ValueKind,
    pub default: Option<Value>,
}

impl ArgumentSlot {
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn is_positional(&self) -> bool {
        self.default.is_none()
    }

    /// 옵션으로 노출될 때의 플래그 이름(`--name`).
    pub fn flag(&self) -> String {
        format!("--{}", self.parameter_name)
    }
}

/// 디스패치 1회 입력. 호출마다 만들어지고 버려진다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub path: Vec<String>,
    pub raw_args: Vec<String>,
}

/// 슬롯에 선언 가능한 강타입 값.
pub trait ArgValue: Sized + Send + 'static {
    fn kind() -> ValueKind;
    fn into_value(self) -> Value;
    fn from_value(value: &Value) -> Option<Self>;
}

impl ArgValue for String {
    fn kind() -> ValueKind {
        ValueKind::Text
    }

    fn into_value(self) -> Value {
        Value::Text(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl ArgValue for i64 {
    fn kind() -> ValueKind {
        ValueKind::Integer
    }

    fn into_value(self) -> Value {
        Value::Integer(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }
}

impl ArgValue for f64 {
    fn kind() -> ValueKind {
        ValueKind::Float
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl ArgValue for bool {
    fn kind() -> ValueKind {
        ValueKind::Boolean
    }

    fn into_value(self) -> Value {
        Value::Boolean(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}

/// 이름으로 왕복 가능한 열거형.
pub trait ChoiceValue: Copy + Send + 'static {
    const NAMES: &'static [&'static str];

    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self>;
}

/// `ChoiceValue` 구현 타입을 슬롯 값으로 쓸 수 있게 한다.
#[macro_export]
macro_rules! impl_choice_arg {
    ($ty:ty) => {
        impl $crate::domain::command::ArgValue for $ty {
            fn kind() -> $crate::domain::command::ValueKind {
                $crate::domain::command::ValueKind::Choice(
                    <$ty as $crate::domain::command::ChoiceValue>::NAMES,
                )
            }

            fn into_value(self) -> $crate::domain::command::Value {
                $crate::domain::command::Value::Choice(
                    <$ty as $crate::domain::command::ChoiceValue>::name(self),
                )
            }

            fn from_value(value: &$crate::domain::command::Value) -> Option<Self> {
                match value {
                    $crate::domain::command::Value::Choice(name) => {
                        <$ty as $crate::domain::command::ChoiceValue>::from_name(name)
                    }
                    _ => None,
                }
            }
        }
    };
}
