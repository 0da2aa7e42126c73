//! Copies position and comment metadata off source nodes.
//!
//! oxc keeps every comment in one program-wide table, so the copier owns a view
//! of that table plus a line index for turning offsets into line/column pairs.
//! Inner comments need to know which nodes sit inside a span, so the copier
//! also records the span of every node in the program once.

use oxc_ast::AstKind;
use oxc_ast::ast::{Comment, Program};
use oxc_ast_visit::Visit;
use oxc_span::{GetSpan, SPAN, Span};

use crate::model::{
    CommentText, CommentType, Location, NodeComments, NodeMetadata, NodePosition, Position,
};

pub(crate) struct MetadataCopier<'s> {
    source: &'s str,
    line_starts: Vec<u32>,
    comments: &'s [Comment],
    /// Spans of every node in the program, sorted by start then end.
    node_spans: Vec<Span>,
    attach_comments: bool,
}

impl<'s> MetadataCopier<'s> {
    pub(crate) fn new(program: &'s Program<'_>, attach_comments: bool) -> Self {
        let source = program.source_text;

        let node_spans = if attach_comments {
            let mut collector = SpanCollector::default();
            collector.visit_program(program);
            let mut spans = collector.spans;
            spans.sort_unstable_by_key(|span| (span.start, span.end));
            spans
        } else {
            Vec::new()
        };

        Self {
            source,
            line_starts: line_starts(source),
            comments: &program.comments,
            node_spans,
            attach_comments,
        }
    }

    /// Position and comments both taken from `span`.
    pub(crate) fn metadata(&self, span: Span) -> NodeMetadata {
        NodeMetadata {
            position: self.position(span),
            comments: self.comments(span),
        }
    }

    /// Position from one node, comments from the node that contained it.
    ///
    /// Used when a declarator or declaration is lifted out of a larger
    /// statement. Comments the parser attached to the lifted node itself are
    /// appended to the container's leading comments.
    pub(crate) fn merged(&self, position_span: Span, comments_span: Span) -> NodeMetadata {
        let mut comments = self.comments(comments_span);
        let lifted = position_span != SPAN && position_span.start != comments_span.start;
        if self.attach_comments && lifted {
            if let Some(own) = self.collect(self.leading(position_span)) {
                comments
                    .leading_comments
                    .get_or_insert_with(Vec::new)
                    .extend(own);
            }
        }

        NodeMetadata {
            position: self.position(position_span),
            comments,
        }
    }

    /// Line/column range of `span`. Always available.
    pub(crate) fn location(&self, span: Span) -> Location {
        Location {
            start: self.point(span.start),
            end: self.point(span.end),
        }
    }

    /// Offsets and range of `span`; empty for synthesized nodes.
    pub(crate) fn position(&self, span: Span) -> NodePosition {
        if span == SPAN {
            return NodePosition::default();
        }
        NodePosition {
            start: Some(span.start),
            end: Some(span.end),
            loc: Some(self.location(span)),
        }
    }

    pub(crate) fn comments(&self, span: Span) -> NodeComments {
        if !self.attach_comments || span == SPAN {
            return NodeComments::default();
        }

        NodeComments {
            leading_comments: self.collect(self.leading(span)),
            trailing_comments: self.collect(self.trailing(span).into_iter()),
            inner_comments: self.collect(self.inner(span).into_iter()),
        }
    }

    fn leading(&self, span: Span) -> impl Iterator<Item = &'s Comment> + '_ {
        self.comments.iter().filter(move |comment| {
            comment.is_leading()
                && comment.attached_to == span.start
                && comment.span.end <= span.start
        })
    }

    /// Comments inside `span` that belong to the node itself.
    ///
    /// A node with children hands every enclosed comment to one of them, so
    /// only childless nodes (an empty block, an empty class body) have inner
    /// comments.
    fn inner(&self, span: Span) -> Vec<&'s Comment> {
        if self.has_children(span) {
            return Vec::new();
        }
        self.comments
            .iter()
            .filter(|comment| comment.span.start >= span.start && comment.span.end <= span.end)
            .collect()
    }

    fn has_children(&self, span: Span) -> bool {
        let first = self
            .node_spans
            .partition_point(|node| node.start < span.start);

        let mut own = false;
        for node in self.node_spans[first..]
            .iter()
            .take_while(|node| node.start < span.end || *node == &span)
        {
            if node.end > span.end {
                continue;
            }
            // a child may share its parent's span (`foo()` without a semicolon)
            if *node == span && !own {
                own = true;
                continue;
            }
            return true;
        }
        false
    }

    /// Comments after `span` on the same line, with only blanks or earlier
    /// trailing comments in between.
    fn trailing(&self, span: Span) -> Vec<&'s Comment> {
        let first = self
            .comments
            .partition_point(|comment| comment.span.start < span.end);

        let mut cursor = span.end;
        let mut trailing = Vec::new();
        for comment in &self.comments[first..] {
            let gap = self.slice(Span::new(cursor, comment.span.start));
            if !gap.chars().all(|c| c.is_whitespace() && !is_line_terminator(c)) {
                break;
            }
            trailing.push(comment);
            cursor = comment.span.end;
        }
        trailing
    }

    fn collect<'c>(&self, comments: impl Iterator<Item = &'c Comment>) -> Option<Vec<CommentText>> {
        let texts: Vec<CommentText> = comments
            .map(|comment| CommentText {
                kind: if comment.is_line() {
                    CommentType::CommentLine
                } else {
                    CommentType::CommentBlock
                },
                value: self.slice(comment.content_span()).to_string(),
                start: comment.span.start,
                end: comment.span.end,
            })
            .collect();
        (!texts.is_empty()).then_some(texts)
    }

    fn point(&self, offset: u32) -> Position {
        let idx = match self.line_starts.binary_search(&offset) {
            Ok(index) => index,
            Err(index) => index.saturating_sub(1),
        };
        let line_start = self.line_starts[idx];
        let column = self
            .source
            .get(line_start as usize..offset as usize)
            .map(|prefix| prefix.encode_utf16().count() as u32)
            .unwrap_or(offset.saturating_sub(line_start));
        Position::new(idx as u32 + 1, column)
    }

    fn slice(&self, span: Span) -> &'s str {
        self.source
            .get(span.start as usize..span.end as usize)
            .unwrap_or_default()
    }
}

/// Offsets at which each line starts.
///
/// `\r\n`, `\n`, `\r`, U+2028 and U+2029 all end a line.
fn line_starts(source: &str) -> Vec<u32> {
    let mut starts = Vec::with_capacity(128);
    starts.push(0);

    let mut chars = source.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if !is_line_terminator(c) {
            continue;
        }
        if c == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            continue;
        }
        starts.push((idx + c.len_utf8()) as u32);
    }
    starts
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Records the span of every node below the program.
#[derive(Default)]
struct SpanCollector {
    spans: Vec<Span>,
}

impl<'a> Visit<'a> for SpanCollector {
    fn enter_node(&mut self, kind: AstKind<'a>) {
        if !matches!(kind, AstKind::Program(_)) {
            self.spans.push(kind.span());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fob_gen::{Allocator, ParseOptions, parse};

    #[test]
    fn computes_line_and_column() {
        let allocator = Allocator::default();
        let source = "var a;\n  var b;";
        let parsed = parse(&allocator, source, ParseOptions::default()).unwrap();
        let copier = MetadataCopier::new(&parsed.program, true);

        let location = copier.location(parsed.program.body[1].span());
        assert_eq!(location.start, Position::new(2, 2));
        assert_eq!(location.end, Position::new(2, 8));
    }

    #[test]
    fn breaks_lines_on_every_terminator() {
        let allocator = Allocator::default();
        let source = "var a;\rvar b;\u{2028}var c;\r\n  var d;\u{2029}var e;";
        let parsed = parse(&allocator, source, ParseOptions::default()).unwrap();
        let copier = MetadataCopier::new(&parsed.program, true);

        let starts: Vec<Position> = parsed
            .program
            .body
            .iter()
            .map(|stmt| copier.location(stmt.span()).start)
            .collect();
        assert_eq!(
            starts,
            vec![
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(3, 0),
                Position::new(4, 2),
                Position::new(5, 0),
            ]
        );
    }

    #[test]
    fn counts_columns_in_utf16_units() {
        let allocator = Allocator::default();
        let source = "var s = \"é😀\"; var b;";
        let parsed = parse(&allocator, source, ParseOptions::default()).unwrap();
        let copier = MetadataCopier::new(&parsed.program, true);

        let location = copier.location(parsed.program.body[1].span());
        assert_eq!(location.start, Position::new(1, 15));
    }

    #[test]
    fn synthesized_span_has_no_position() {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, "var a;", ParseOptions::default()).unwrap();
        let copier = MetadataCopier::new(&parsed.program, true);

        assert_eq!(copier.position(SPAN), NodePosition::default());
        assert!(copier.comments(SPAN).is_empty());
    }

    #[test]
    fn groups_comments() {
        let allocator = Allocator::default();
        let source = "// lead\n{ /* in */ } // tail\nvar b;";
        let parsed = parse(&allocator, source, ParseOptions::default()).unwrap();
        let copier = MetadataCopier::new(&parsed.program, true);

        let comments = copier.comments(parsed.program.body[0].span());
        let leading = comments.leading_comments.unwrap();
        assert_eq!(leading.len(), 1);
        assert_eq!(leading[0].value, " lead");
        assert_eq!(leading[0].kind, CommentType::CommentLine);

        let inner = comments.inner_comments.unwrap();
        assert_eq!(inner[0].value, " in ");
        assert_eq!(inner[0].kind, CommentType::CommentBlock);

        let trailing = comments.trailing_comments.unwrap();
        assert_eq!(trailing[0].value, " tail");

        assert!(copier.comments(parsed.program.body[1].span()).is_empty());
    }

    #[test]
    fn inner_comments_belong_to_the_innermost_childless_node() {
        let allocator = Allocator::default();
        let source = "class A { /* in */ }\nfoo(/* arg */)";
        let parsed = parse(&allocator, source, ParseOptions::default()).unwrap();
        let copier = MetadataCopier::new(&parsed.program, true);

        // the class body encloses the comment
        assert!(copier.comments(parsed.program.body[0].span()).inner_comments.is_none());
        // the call shares the statement's span and owns the comment
        assert!(copier.comments(parsed.program.body[1].span()).inner_comments.is_none());
    }

    #[test]
    fn respects_disabled_comments() {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, "// lead\nvar a;", ParseOptions::default()).unwrap();
        let copier = MetadataCopier::new(&parsed.program, false);

        assert!(copier.comments(parsed.program.body[0].span()).is_empty());
    }
}
