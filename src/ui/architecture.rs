//! Architecture overview panel

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::{Architecture, ServiceNode};
use crate::theme::{
    accent, fade, BG_SECONDARY, BORDER_SUBTLE, ROUNDED_BORDERS, TEXT_FAINT, TEXT_SECONDARY,
};
use crate::ui::helpers::truncate;

/// Rows one tier of nodes needs: tallest name plus the description line
fn tier_height(nodes: &[ServiceNode]) -> u16 {
    nodes
        .iter()
        .map(|n| n.name.lines().count() as u16 + 1)
        .max()
        .unwrap_or(0)
}

/// Rows the whole panel needs, borders included
pub fn panel_height(arch: &Architecture) -> u16 {
    let routing = u16::from(!arch.routing_label.is_empty());
    2 + tier_height(&arch.platform) + routing + tier_height(&arch.services)
}

fn render_tier(area: Rect, nodes: &[ServiceNode], frame: &mut Frame) {
    if nodes.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, nodes.len() as u32); nodes.len()];
    let columns = Layout::horizontal(constraints).spacing(1).split(area);

    for (node, column) in nodes.iter().zip(columns.iter()) {
        let width = column.width as usize;
        let mut lines: Vec<Line> = node
            .name
            .lines()
            .map(|l| {
                Line::from(Span::styled(
                    truncate(l.trim(), width),
                    Style::default()
                        .fg(accent(node.color))
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        lines.push(Line::from(Span::styled(
            truncate(&node.description, width),
            Style::default().fg(TEXT_FAINT),
        )));
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().bg(fade(node.color, 0.15))),
            *column,
        );
    }
}

pub fn render_architecture(area: Rect, arch: &Architecture, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY))
        .title(Span::styled(
            format!(" {} ", arch.title),
            Style::default()
                .fg(TEXT_SECONDARY)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let routing = u16::from(!arch.routing_label.is_empty());
    let [platform_area, routing_area, services_area] = Layout::vertical([
        Constraint::Length(tier_height(&arch.platform)),
        Constraint::Length(routing),
        Constraint::Length(tier_height(&arch.services)),
    ])
    .areas(inner);

    render_tier(platform_area, &arch.platform, frame);
    if routing > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("──── {} ────", arch.routing_label),
                Style::default().fg(TEXT_FAINT),
            ))
            .alignment(Alignment::Center),
            routing_area,
        );
    }
    render_tier(services_area, &arch.services, frame);
}
