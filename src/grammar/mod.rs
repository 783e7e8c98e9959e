//! Dimension token grammar (verb module)
//!
//! Parses one dimension token string into a structural tuple. Pure
//! string processing: no lookups, no reference data. Tokens have the
//! shape `prog[offset].stage[offset].dim:op1:val1:op2:val2`, where every
//! part except the final dimension segment is optional.

use crate::error::QueryError;

/// Literal joining OR-siblings inside one dimension parameter
pub const OR_SEPARATOR: &str = "_OR_";

/// A program or stage path segment with its repeat offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSegment {
    pub uid: String,
    pub offset: i32,
}

/// One `op:val` filter field pair, still untyped
///
/// The value is absent when an odd trailing field closed the token; it
/// is kept rather than dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFilter {
    pub operator: String,
    pub value: Option<String>,
}

impl RawFilter {
    /// Canonical `op` or `op:val` rendering
    pub fn render(&self) -> String {
        match &self.value {
            Some(value) => format!("{}:{}", self.operator, value),
            None => self.operator.clone(),
        }
    }
}

/// Structural result of parsing one dimension token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedToken {
    pub program: Option<ParsedSegment>,
    pub stage: Option<ParsedSegment>,
    pub dimension: String,
    pub filters: Vec<RawFilter>,
}

impl ParsedToken {
    /// Filter pairs rendered back to strings, as handed to lookups and
    /// to static dimension payloads
    pub fn filter_strings(&self) -> Vec<String> {
        self.filters.iter().map(RawFilter::render).collect()
    }
}

/// Split a request token into its OR-siblings
///
/// Happens before grammar parsing; each sibling parses independently but
/// shares one group id.
pub fn split_or(token: &str) -> Vec<&str> {
    token.split(OR_SEPARATOR).filter(|s| !s.is_empty()).collect()
}

/// Parse one dimension token
pub fn parse(token: &str) -> Result<ParsedToken, QueryError> {
    let fields: Vec<&str> = token.split(':').collect();
    let path = fields[0];
    let segments: Vec<&str> = path.split('.').collect();

    let (program, stage, dimension) = match segments.as_slice() {
        [dim] => (None, None, *dim),
        [prog, dim] => (Some(parse_segment(prog, token)?), None, *dim),
        [prog, stage, dim] => (
            Some(parse_segment(prog, token)?),
            Some(parse_segment(stage, token)?),
            *dim,
        ),
        _ => return Err(QueryError::MalformedDimension(token.to_string())),
    };

    if dimension.is_empty() || dimension.contains('[') {
        return Err(QueryError::MalformedDimension(token.to_string()));
    }

    Ok(ParsedToken {
        program,
        stage,
        dimension: dimension.to_string(),
        filters: parse_filters(&fields[1..]),
    })
}

/// Render the canonical token for a scope and dimension, the inverse of
/// [`parse`] for filterless tokens
pub fn render(
    program: Option<(&str, i32)>,
    stage: Option<(&str, i32)>,
    dimension: &str,
) -> String {
    let mut out = String::new();
    for (uid, offset) in [program, stage].into_iter().flatten() {
        if offset != 0 {
            out.push_str(&format!("{uid}[{offset}]."));
        } else {
            out.push_str(uid);
            out.push('.');
        }
    }
    out.push_str(dimension);
    out
}

/// Fields after the dimension path, consumed pairwise from the first
fn parse_filters(fields: &[&str]) -> Vec<RawFilter> {
    if fields.is_empty() || (fields.len() == 1 && fields[0].is_empty()) {
        return vec![];
    }
    fields
        .chunks(2)
        .map(|pair| match pair {
            [op, val] => RawFilter {
                operator: (*op).to_string(),
                value: Some((*val).to_string()),
            },
            [op] => RawFilter {
                operator: (*op).to_string(),
                value: None,
            },
            _ => unreachable!("chunks(2) yields one or two fields"),
        })
        .collect()
}

fn parse_segment(segment: &str, token: &str) -> Result<ParsedSegment, QueryError> {
    let Some(open) = segment.find('[') else {
        if segment.is_empty() {
            return Err(QueryError::MalformedDimension(token.to_string()));
        }
        return Ok(ParsedSegment {
            uid: segment.to_string(),
            offset: 0,
        });
    };

    if !segment.ends_with(']') || open == 0 {
        return Err(QueryError::MalformedDimension(token.to_string()));
    }
    let uid = &segment[..open];
    let inner = &segment[open + 1..segment.len() - 1];
    let offset = inner
        .parse::<i32>()
        .map_err(|_| QueryError::InvalidOffset(token.to_string()))?;

    Ok(ParsedSegment {
        uid: uid.to_string(),
        offset,
    })
}
