//! Reader for `project.pbxproj` files.
//!
//! Xcode writes the project graph as an OpenStep (ASCII) property list.
//! Projects converted with `plutil -convert json` are accepted as well.

use crate::sbom_generation::domain::{PackageRequirement, ProjectObject};
use crate::shared::Result;

const PRODUCT_DEPENDENCY_ISA: &str = "XCSwiftPackageProductDependency";
const REMOTE_REFERENCE_ISA: &str = "XCRemoteSwiftPackageReference";

/// A property list value; dictionaries keep their file order
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlistValue {
    String(String),
    Array(Vec<PlistValue>),
    Dictionary(Vec<(String, PlistValue)>),
}

impl PlistValue {
    fn get(&self, key: &str) -> Option<&PlistValue> {
        match self {
            PlistValue::Dictionary(entries) => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            PlistValue::String(s) => Some(s),
            _ => None,
        }
    }

    fn string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(PlistValue::as_str).map(str::to_string)
    }
}

impl From<serde_json::Value> for PlistValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => {
                PlistValue::Dictionary(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            serde_json::Value::Array(items) => {
                PlistValue::Array(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::String(s) => PlistValue::String(s),
            serde_json::Value::Null => PlistValue::String(String::new()),
            other => PlistValue::String(other.to_string()),
        }
    }
}

/// Parses pbxproj content into typed objects, in file order
pub fn parse_project_objects(content: &str) -> Result<Vec<ProjectObject>> {
    let root = parse_plist(content)?;
    let Some(PlistValue::Dictionary(objects)) = root.get("objects") else {
        anyhow::bail!("missing \"objects\" dictionary");
    };

    Ok(objects
        .iter()
        .map(|(id, object)| to_project_object(id, object))
        .collect())
}

pub(crate) fn parse_plist(content: &str) -> Result<PlistValue> {
    if content.trim_start().starts_with('{') {
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(content) {
            return Ok(json.into());
        }
    }
    OpenStepParser::new(content).parse_document()
}

fn to_project_object(id: &str, object: &PlistValue) -> ProjectObject {
    let isa = object.string("isa").unwrap_or_default();
    let other = || ProjectObject::Other {
        id: id.to_string(),
        isa: isa.clone(),
    };

    match isa.as_str() {
        PRODUCT_DEPENDENCY_ISA => match object.string("productName") {
            Some(product_name) => ProjectObject::RemotePackageProductDependency {
                id: id.to_string(),
                product_name,
                package: object.string("package"),
            },
            None => other(),
        },
        REMOTE_REFERENCE_ISA => match object.string("repositoryURL") {
            Some(repository_url) => {
                let requirement = object
                    .get("requirement")
                    .map(|r| PackageRequirement {
                        version: r.string("version"),
                        revision: r.string("revision"),
                        branch: r.string("branch"),
                    })
                    .unwrap_or_default();
                ProjectObject::RemotePackageReference {
                    id: id.to_string(),
                    repository_url,
                    requirement,
                }
            }
            None => other(),
        },
        _ => other(),
    }
}

struct OpenStepParser {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl OpenStepParser {
    fn new(content: &str) -> Self {
        Self {
            chars: content.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn parse_document(mut self) -> Result<PlistValue> {
        let value = self.parse_value()?;
        self.skip_trivia()?;
        if let Some(c) = self.peek() {
            anyhow::bail!("unexpected '{}' after document at line {}", c, self.line);
        }
        Ok(value)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        self.skip_trivia()?;
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => anyhow::bail!(
                "expected '{}' but found '{}' at line {}",
                expected,
                c,
                self.line
            ),
            None => anyhow::bail!("expected '{}' but reached end of file", expected),
        }
    }

    /// Skips whitespace and `/* */` or `//` comments
    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            match (self.peek(), self.chars.get(self.pos + 1).copied()) {
                (Some(c), _) if c.is_whitespace() => {
                    self.bump();
                }
                (Some('/'), Some('*')) => {
                    let start = self.line;
                    self.pos += 2;
                    loop {
                        match self.bump() {
                            Some('*') if self.peek() == Some('/') => {
                                self.bump();
                                break;
                            }
                            Some(_) => {}
                            None => anyhow::bail!("unterminated comment starting at line {}", start),
                        }
                    }
                }
                (Some('/'), Some('/')) => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn parse_value(&mut self) -> Result<PlistValue> {
        self.skip_trivia()?;
        match self.peek() {
            Some('{') => self.parse_dictionary(),
            Some('(') => self.parse_array(),
            Some('"') => self.parse_quoted().map(PlistValue::String),
            Some('<') => self.parse_data().map(PlistValue::String),
            Some(c) if is_bare_char(c) => Ok(PlistValue::String(self.parse_bare())),
            Some(c) => anyhow::bail!("unexpected '{}' at line {}", c, self.line),
            None => anyhow::bail!("unexpected end of file"),
        }
    }

    fn parse_dictionary(&mut self) -> Result<PlistValue> {
        self.expect('{')?;
        let mut entries = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some('}') {
                self.bump();
                return Ok(PlistValue::Dictionary(entries));
            }
            let key = match self.parse_value()? {
                PlistValue::String(key) => key,
                _ => anyhow::bail!("dictionary key must be a string at line {}", self.line),
            };
            self.expect('=')?;
            let value = self.parse_value()?;
            self.expect(';')?;
            entries.push((key, value));
        }
    }

    fn parse_array(&mut self) -> Result<PlistValue> {
        self.expect('(')?;
        let mut items = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some(')') {
                self.bump();
                return Ok(PlistValue::Array(items));
            }
            items.push(self.parse_value()?);
            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(')') => {}
                Some(c) => anyhow::bail!("expected ',' or ')' but found '{}' at line {}", c, self.line),
                None => anyhow::bail!("unterminated array"),
            }
        }
    }

    fn parse_quoted(&mut self) -> Result<String> {
        let start = self.line;
        self.bump();
        let mut value = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(value),
                Some('\\') => match self.bump() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('r') => value.push('\r'),
                    Some('U') => {
                        let hex: String = (0..4).filter_map(|_| self.bump()).collect();
                        let decoded = u32::from_str_radix(&hex, 16)
                            .ok()
                            .and_then(char::from_u32)
                            .unwrap_or(char::REPLACEMENT_CHARACTER);
                        value.push(decoded);
                    }
                    Some(c) => value.push(c),
                    None => break,
                },
                Some(c) => value.push(c),
                None => break,
            }
        }
        anyhow::bail!("unterminated string starting at line {}", start)
    }

    fn parse_data(&mut self) -> Result<String> {
        let start = self.line;
        self.bump();
        let mut value = String::new();
        loop {
            match self.bump() {
                Some('>') => return Ok(value),
                Some(c) if !c.is_whitespace() => value.push(c),
                Some(_) => {}
                None => anyhow::bail!("unterminated data starting at line {}", start),
            }
        }
    }

    fn parse_bare(&mut self) -> String {
        let mut value = String::new();
        while let Some(c) = self.peek().filter(|c| is_bare_char(*c)) {
            value.push(c);
            self.bump();
        }
        value
    }
}

fn is_bare_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '+' | '/' | ':' | '.' | '-')
}
