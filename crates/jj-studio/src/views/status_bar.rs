//! Status Bar Widget
//!
//! Format: `[timestamp] icon message                     [source]`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 || area.width < 2 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        let right_edge = area.x + area.width;
        let mut x = area.x + 1;

        if !vm.timestamp.is_empty() {
            let stamp = format!("[{}] ", vm.timestamp);
            let (next_x, _) = buf.set_stringn(
                x,
                area.y,
                &stamp,
                usize::from(right_edge - x),
                vm.metadata_style,
            );
            x = next_x;
        }

        let source = if vm.source.is_empty() {
            String::new()
        } else {
            format!("[{}]", vm.source)
        };
        let source_width = source.chars().count() as u16;
        let message_end = right_edge.saturating_sub(source_width + 2).max(x);

        let text = format!("{} {}", vm.icon, vm.message);
        if x < message_end {
            buf.set_stringn(
                x,
                area.y,
                &text,
                usize::from(message_end - x),
                vm.message_style,
            );
        }

        if !source.is_empty() && source_width + 1 < area.width {
            let source_x = right_edge - source_width - 1;
            buf.set_string(source_x, area.y, &source, vm.metadata_style);
        }
    }
}
