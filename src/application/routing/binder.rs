//! 파라미터 바인더.
//! 선언된 파라미터를 슬롯으로 분류하고, 호출 시 원시 토큰을 슬롯 값으로 묶는다.

use std::collections::HashSet;

use anyhow::{Result, anyhow};

use crate::application::routing::error::BindingError;
use crate::application::routing::registry::SubcommandMeta;
use crate::domain::command::{ArgValue, ArgumentSlot, Value, ValueKind};

/// 옵션 해석을 끝내는 구분 토큰.
const END_OF_OPTIONS: &str = "--";

/// 파라미터 선언 순서대로 슬롯을 만든다.
/// 기본값이 있으면 `--name` 옵션, 없으면 필수 위치 인자가 된다.
pub fn bind_parameters(meta: &SubcommandMeta) -> Vec<ArgumentSlot> {
    meta.parameters
        .iter()
        .map(|param| ArgumentSlot {
            parameter_name: param.name.clone(),
            description: param.description.clone(),
            kind: param.kind,
            default: param.default.clone(),
        })
        .collect()
}

/// 슬롯 목록의 구조적 결함을 찾는다.
pub(crate) fn validate_slots(slots: &[ArgumentSlot]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for slot in slots {
        let name = slot.parameter_name.as_str();
        if name.is_empty() {
            return Err("parameter name must not be empty".to_string());
        }
        if name.starts_with('-') || name.contains(char::is_whitespace) || name.contains('=') {
            return Err(format!("parameter name '{name}' is not a valid identifier"));
        }
        if !seen.insert(name) {
            return Err(format!("parameter '{name}' is declared more than once"));
        }
        if let Some(default) = &slot.default
            && !default.kind_matches(slot.kind)
        {
            return Err(format!(
                "default value '{default}' of '{name}' is not {}",
                slot.kind.expectation()
            ));
        }
    }
    Ok(())
}

/// 남은 토큰을 슬롯 값으로 묶는다.
/// 위치 토큰은 위치 슬롯에 왼쪽부터 채우고, 생략된 옵션에는 기본값을 쓴다.
pub fn bind_tokens(slots: &[ArgumentSlot], tokens: &[String]) -> Result<BoundArgs, BindingError> {
    let mut supplied: Vec<Option<Value>> = vec![None; slots.len()];
    let mut positional_tokens: Vec<&String> = Vec::new();
    let mut options_done = false;
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        if options_done {
            positional_tokens.push(token);
            continue;
        }
        if token == END_OF_OPTIONS {
            options_done = true;
            continue;
        }
        let Some(flag) = token.strip_prefix("--") else {
            positional_tokens.push(token);
            continue;
        };

        let (name, inline) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (flag, None),
        };
        let Some(index) = slots
            .iter()
            .position(|slot| slot.has_default() && slot.parameter_name == name)
        else {
            return Err(BindingError::UnknownOption {
                option: format!("--{name}"),
            });
        };
        if supplied[index].is_some() {
            return Err(BindingError::DuplicateOption {
                option: name.to_string(),
            });
        }

        let slot = &slots[index];
        let raw = match inline {
            Some(value) => value,
            // 값 없는 bool 옵션은 true. 명시적 값은 `--name=false`로만 준다.
            None if slot.kind == ValueKind::Boolean => "true".to_string(),
            None => {
                let takes_next = iter.peek().is_some_and(|next| !next.starts_with("--"));
                if !takes_next {
                    return Err(BindingError::MissingOptionValue {
                        option: name.to_string(),
                    });
                }
                iter.next().cloned().unwrap_or_default()
            }
        };
        supplied[index] = Some(coerce(slot, &raw)?);
    }

    let mut positional = positional_tokens.into_iter();
    for (index, slot) in slots.iter().enumerate() {
        if !slot.is_positional() {
            continue;
        }
        let Some(raw) = positional.next() else {
            return Err(BindingError::MissingArgument {
                parameter: slot.parameter_name.clone(),
            });
        };
        supplied[index] = Some(coerce(slot, raw)?);
    }
    if let Some(extra) = positional.next() {
        return Err(BindingError::UnexpectedArgument {
            token: extra.clone(),
        });
    }

    let entries = slots
        .iter()
        .zip(supplied)
        .filter_map(|(slot, value)| {
            value
                .or_else(|| slot.default.clone())
                .map(|value| (slot.parameter_name.clone(), value))
        })
        .collect();
    Ok(BoundArgs { entries })
}

fn coerce(slot: &ArgumentSlot, raw: &str) -> Result<Value, BindingError> {
    slot.kind
        .coerce(raw)
        .map_err(|expected| BindingError::InvalidValue {
            parameter: slot.parameter_name.clone(),
            token: raw.to_string(),
            expected,
        })
}

/// 슬롯 바인딩 결과. 선언 순서를 유지한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArgs {
    entries: Vec<(String, Value)>,
}

impl BoundArgs {
    pub fn from_entries(entries: Vec<(String, Value)>) -> Self {
        Self { entries }
    }

    /// 이름으로 값을 꺼내 요청 타입으로 변환한다.
    pub fn get<V: ArgValue>(&self, name: &str) -> Result<V> {
        let value = self
            .value(name)
            .ok_or_else(|| anyhow!("argument '{name}' is not bound"))?;
        V::from_value(value).ok_or_else(|| {
            anyhow!(
                "argument '{name}' holds '{value}', which is not {}",
                V::kind().expectation()
            )
        })
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value)
    }

    /// 선언 순서대로의 값.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
