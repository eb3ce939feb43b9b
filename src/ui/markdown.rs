use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub fn markdown_to_lines(text: &str) -> Vec<Line<'static>> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, opts);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current_spans: Vec<Span<'static>> = Vec::new();
    let mut style_stack: Vec<Style> = vec![Style::default()];
    // One entry per open list: next number for ordered lists, None for bullets.
    let mut list_stack: Vec<Option<u64>> = Vec::new();
    let mut in_code_block = false;
    let mut link_dest: Option<String> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Paragraph) => {}
            Event::End(TagEnd::Paragraph) => {
                flush(&mut lines, &mut current_spans);
                if list_stack.is_empty() {
                    lines.push(Line::from(""));
                }
            }
            Event::Start(Tag::Strong) => push_style(&mut style_stack, Modifier::BOLD),
            Event::Start(Tag::Emphasis) => push_style(&mut style_stack, Modifier::ITALIC),
            Event::Start(Tag::Strikethrough) => {
                push_style(&mut style_stack, Modifier::CROSSED_OUT)
            }
            Event::End(TagEnd::Strong | TagEnd::Emphasis | TagEnd::Strikethrough) => {
                style_stack.pop();
            }
            Event::Start(Tag::List(start)) => {
                flush(&mut lines, &mut current_spans);
                list_stack.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                list_stack.pop();
                if list_stack.is_empty() {
                    lines.push(Line::from(""));
                }
            }
            Event::Start(Tag::Item) => {
                flush(&mut lines, &mut current_spans);
                let indent = "  ".repeat(list_stack.len().saturating_sub(1));
                let marker = match list_stack.last_mut() {
                    Some(Some(n)) => {
                        let m = format!("{}. ", n);
                        *n += 1;
                        m
                    }
                    _ => "• ".to_string(),
                };
                current_spans.push(Span::raw(format!("  {}{}", indent, marker)));
            }
            Event::End(TagEnd::Item) => {
                flush(&mut lines, &mut current_spans);
            }
            Event::Start(Tag::CodeBlock(_)) => {
                flush(&mut lines, &mut current_spans);
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                lines.push(Line::from(""));
            }
            Event::Start(Tag::Heading { level, .. }) => {
                flush(&mut lines, &mut current_spans);
                let prefix = match level {
                    HeadingLevel::H1 => "# ",
                    HeadingLevel::H2 => "## ",
                    HeadingLevel::H3 => "### ",
                    _ => "",
                };
                current_spans.push(Span::styled(
                    prefix.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                push_style(&mut style_stack, Modifier::BOLD);
            }
            Event::End(TagEnd::Heading(_)) => {
                style_stack.pop();
                flush(&mut lines, &mut current_spans);
                lines.push(Line::from(""));
            }
            Event::Start(Tag::Link { dest_url, .. }) => {
                let current = current_style(&style_stack);
                style_stack.push(current.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED));
                link_dest = Some(dest_url.to_string());
            }
            Event::End(TagEnd::Link) => {
                style_stack.pop();
                if let Some(url) = link_dest.take() {
                    current_spans.push(Span::styled(
                        format!(" <{}>", url),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
            Event::Start(Tag::Image { dest_url, .. }) => {
                current_spans.push(Span::styled(
                    "[image: ".to_string(),
                    Style::default().fg(Color::Magenta),
                ));
                link_dest = Some(dest_url.to_string());
            }
            Event::End(TagEnd::Image) => {
                let url = link_dest.take().unwrap_or_default();
                current_spans.push(Span::styled(
                    format!(" <{}>]", url),
                    Style::default().fg(Color::Magenta),
                ));
            }
            Event::Text(text) => {
                if in_code_block {
                    for code_line in text.lines() {
                        lines.push(Line::from(Span::styled(
                            format!("  {}", code_line),
                            Style::default().fg(Color::Green),
                        )));
                    }
                } else {
                    current_spans.push(Span::styled(text.to_string(), current_style(&style_stack)));
                }
            }
            Event::Code(code) => {
                current_spans.push(Span::styled(
                    format!("`{}`", code),
                    Style::default().fg(Color::Yellow),
                ));
            }
            Event::SoftBreak | Event::HardBreak => {
                flush(&mut lines, &mut current_spans);
            }
            Event::Rule => {
                lines.push(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            _ => {}
        }
    }

    flush(&mut lines, &mut current_spans);
    while lines
        .last()
        .map_or(false, |l| l.spans.iter().all(|s| s.content.is_empty()))
    {
        lines.pop();
    }
    lines
}

fn current_style(stack: &[Style]) -> Style {
    stack.last().copied().unwrap_or_default()
}

fn push_style(stack: &mut Vec<Style>, modifier: Modifier) {
    let current = current_style(stack);
    stack.push(current.add_modifier(modifier));
}

fn flush(lines: &mut Vec<Line<'static>>, spans: &mut Vec<Span<'static>>) {
    if !spans.is_empty() {
        lines.push(Line::from(std::mem::take(spans)));
    }
}
