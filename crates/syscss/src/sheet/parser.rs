use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_till, take_till1, take_until, take_while1},
    character::complete::{char, multispace0},
    combinator::{eof, map, opt, peek, recognize, value},
    multi::many0,
    sequence::{delimited, preceded, tuple},
};

use crate::error::SheetError;
use crate::sheet::{AtRule, Node, Rule};

/// Parses a stylesheet into a tree of nodes. Nested rules are kept nested.
pub fn parse(source: &str) -> Result<Vec<Node>, SheetError> {
    let (remaining, nodes) =
        parse_nodes(source).map_err(|e| SheetError::InvalidSyntax(e.to_string()))?;

    let remaining = remaining.trim();
    if remaining.is_empty() {
        return Ok(nodes);
    }

    let snippet = remaining.lines().next().unwrap_or(remaining).trim().to_string();
    if remaining.matches('{').count() > remaining.matches('}').count() {
        Err(SheetError::UnclosedBlock(snippet))
    } else {
        Err(SheetError::InvalidSyntax(format!(
            "Unexpected tokens at end of stylesheet: {snippet}"
        )))
    }
}

fn parse_nodes(input: &str) -> IResult<&str, Vec<Node>> {
    let (input, nodes) = many0(preceded(
        multispace0,
        alt((map(parse_node, Some), value(None, char(';')))),
    ))(input)?;
    Ok((input, nodes.into_iter().flatten().collect()))
}

fn parse_node(input: &str) -> IResult<&str, Node> {
    alt((parse_comment, parse_at_rule, parse_rule, parse_declaration))(input)
}

fn parse_block(input: &str) -> IResult<&str, Vec<Node>> {
    delimited(char('{'), parse_nodes, preceded(multispace0, char('}')))(input)
}

fn parse_comment(input: &str) -> IResult<&str, Node> {
    map(
        recognize(tuple((tag("/*"), take_until("*/"), tag("*/")))),
        |comment: &str| Node::Comment(comment.to_string()),
    )(input)
}

fn parse_at_rule(input: &str) -> IResult<&str, Node> {
    let (input, _) = char('@')(input)?;
    let (input, name) = take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)?;
    let (input, prelude) = take_till(|c: char| matches!(c, '{' | '}' | ';'))(input)?;
    let (input, block) = alt((map(parse_block, Some), value(None, opt(char(';')))))(input)?;

    Ok((
        input,
        Node::AtRule(AtRule {
            name: name.to_string(),
            prelude: prelude.trim().to_string(),
            block,
        }),
    ))
}

fn parse_rule(input: &str) -> IResult<&str, Node> {
    let (input, selector) = take_till1(|c: char| matches!(c, '{' | '}' | ';'))(input)?;
    let (input, children) = parse_block(input)?;
    Ok((input, Node::Rule(Rule::new(selector.trim(), children))))
}

/// A declaration ends at `;`, or just before the `}` closing its block.
fn parse_declaration(input: &str) -> IResult<&str, Node> {
    let (input, text) = take_till1(|c: char| matches!(c, '{' | '}' | ';'))(input)?;
    let (input, _) = alt((tag(";"), peek(tag("}")), eof))(input)?;
    Ok((input, Node::Declaration(text.trim().to_string())))
}
