//! REPL 한 줄을 토큰으로 나눈다.

/// 공백으로 나누되 큰따옴표 안의 공백은 보존한다.
/// 따옴표는 제거되고 `""`는 빈 토큰이 된다. 닫히지 않은 따옴표는 줄 끝까지 이어진다.
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if has_token {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(
            split_command_line("  api   log\t--logLevel Warning "),
            ["api", "log", "--logLevel", "Warning"]
        );
        assert!(split_command_line("   ").is_empty());
    }

    #[test]
    fn quotes_group_and_are_removed() {
        assert_eq!(
            split_command_line(r#"position get "a b" x"y z""#),
            ["position", "get", "a b", "xy z"]
        );
        assert_eq!(split_command_line(r#"cmd "" next"#), ["cmd", "", "next"]);
    }

    #[test]
    fn unterminated_quote_runs_to_end() {
        assert_eq!(split_command_line(r#"say "hello  world"#), ["say", "hello  world"]);
    }
}
