//! Containers that can hold multiple widgets.
//!
//! Padding is given as `Vec4(left, right, top, bottom)`.

use glam::{Vec2, Vec4};

use crate::{
    DrawList, UpdateContext,
    widgets::{LayoutContext, Widget},
};

/// Alignment options for widgets within a container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Alignment {
    Start,
    Center,
    End,
}

/// Justification options for widgets within a container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Justification {
    Start,
    Center,
    End,
    SpaceBetween,
}

macro_rules! container_methods {
    ($container:ident) => {
        impl $container {
            /// Adds a widget to the container.
            pub fn add_widget<T: Widget + 'static>(&mut self, widget: T) {
                self.widgets.push(Box::new(widget));
            }

            /// Gets a certain widget by index.
            pub fn get_widget<T: Widget + 'static>(&self, index: usize) -> Option<&T> {
                self.widgets.get(index)?.as_any().downcast_ref::<T>()
            }

            /// Gets a certain widget by index as mutable.
            pub fn get_widget_mut<T: Widget + 'static>(&mut self, index: usize) -> Option<&mut T> {
                self.widgets
                    .get_mut(index)?
                    .as_any_mut()
                    .downcast_mut::<T>()
            }

            /// Traverses through containers to find a widget of type T and returns a reference.
            pub fn find_widget<T: Widget + 'static>(&self, indices: &[usize]) -> Option<&T> {
                (self as &dyn Widget).find(indices)
            }

            /// Traverses through containers to find a widget of type T and returns a mutable
            /// reference.
            pub fn find_widget_mut<T: Widget + 'static>(
                &mut self,
                indices: &[usize],
            ) -> Option<&mut T> {
                (self as &mut dyn Widget).find_mut(indices)
            }

            pub fn len(&self) -> usize {
                self.widgets.len()
            }

            pub fn is_empty(&self) -> bool {
                self.widgets.is_empty()
            }
        }
    };
}

container_methods!(Column);
container_methods!(Row);
container_methods!(Stack);

/// A vertical column container that arranges its child widgets vertically.
pub struct Column {
    pub widgets: Vec<Box<dyn Widget>>,
    pub spacing: f32,
    pub alignment: Alignment,
    pub padding: Vec4,
    pub justification: Justification,
    pub min_size: Vec2,
}

impl Column {
    /// Creates a new `Column` container with the specified spacing, alignment, padding, and
    /// justification.
    pub fn new(
        spacing: f32,
        alignment: Alignment,
        padding: Vec4,
        justification: Justification,
    ) -> Self {
        Self {
            widgets: Vec::new(),
            spacing,
            alignment,
            padding,
            justification,
            min_size: Vec2::ZERO,
        }
    }
}

impl Widget for Column {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn size_hint(&self) -> Vec2 {
        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;

        for widget in &self.widgets {
            let size = widget.size_hint();
            width = width.max(size.x);
            height += size.y;
        }

        height += self.spacing * (self.widgets.len().saturating_sub(1)) as f32;
        width += self.padding.x + self.padding.y;
        height += self.padding.z + self.padding.w;

        Vec2::new(width, height).max(self.min_size)
    }

    fn update(&mut self, ctx: &UpdateContext) {
        for widget in &mut self.widgets {
            widget.update(ctx);
        }
    }

    fn layout(&mut self, ctx: &LayoutContext) -> Vec2 {
        let content_height = ctx.max_size.y - self.padding.z - self.padding.w;
        let content_width = ctx.max_size.x - self.padding.x - self.padding.y;
        let total_height_widget = self.widgets.iter().map(|w| w.size_hint().y).sum::<f32>();

        let spacing = match self.justification {
            Justification::SpaceBetween if self.widgets.len() > 1 => {
                ((content_height - total_height_widget) / (self.widgets.len() as f32 - 1.0))
                    .max(0.0)
            }
            _ => self.spacing,
        };

        let total_height =
            total_height_widget + spacing * (self.widgets.len().saturating_sub(1)) as f32;

        let mut cursor_y = match self.justification {
            Justification::Start | Justification::SpaceBetween => ctx.cursor.y + self.padding.z,
            Justification::Center => {
                ctx.cursor.y + self.padding.z + (content_height - total_height) / 2.0
            }
            Justification::End => {
                ctx.cursor.y + ctx.max_size.y - self.padding.w - total_height
            }
        };

        for widget in self.widgets.iter_mut() {
            let widget_size = widget.size_hint();
            let offset_x = match self.alignment {
                Alignment::Start => self.padding.x,
                Alignment::Center => self.padding.x + (content_width - widget_size.x) / 2.0,
                Alignment::End => ctx.max_size.x - self.padding.y - widget_size.x,
            };

            widget.layout(&LayoutContext {
                max_size: widget_size,
                cursor: Vec2::new(ctx.cursor.x + offset_x, cursor_y),
            });
            cursor_y += widget_size.y + spacing;
        }

        Vec2::new(
            ctx.max_size.x,
            total_height + self.padding.z + self.padding.w,
        )
    }

    fn draw(&self, list: &mut DrawList) {
        for widget in &self.widgets {
            widget.draw(list);
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.widgets
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.widgets
    }
}

/// A horizontal row container that arranges its child widgets horizontally.
pub struct Row {
    pub widgets: Vec<Box<dyn Widget>>,
    pub spacing: f32,
    pub alignment: Alignment,
    pub padding: Vec4,
    pub justification: Justification,
    pub min_size: Vec2,
}

impl Row {
    /// Creates a new `Row` container with the specified spacing, alignment, padding, and
    /// justification.
    pub fn new(
        spacing: f32,
        alignment: Alignment,
        padding: Vec4,
        justification: Justification,
    ) -> Self {
        Self {
            widgets: Vec::new(),
            spacing,
            alignment,
            padding,
            justification,
            min_size: Vec2::ZERO,
        }
    }
}

impl Widget for Row {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn size_hint(&self) -> Vec2 {
        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;

        for widget in &self.widgets {
            let size = widget.size_hint();
            width += size.x;
            height = height.max(size.y);
        }

        width += self.spacing * (self.widgets.len().saturating_sub(1)) as f32;
        width += self.padding.x + self.padding.y;
        height += self.padding.z + self.padding.w;

        Vec2::new(width, height).max(self.min_size)
    }

    fn update(&mut self, ctx: &UpdateContext) {
        for widget in &mut self.widgets {
            widget.update(ctx);
        }
    }

    fn layout(&mut self, ctx: &LayoutContext) -> Vec2 {
        let content_width = ctx.max_size.x - self.padding.x - self.padding.y;
        let content_height = ctx.max_size.y - self.padding.z - self.padding.w;
        let total_width_widget = self.widgets.iter().map(|w| w.size_hint().x).sum::<f32>();

        let spacing = match self.justification {
            Justification::SpaceBetween if self.widgets.len() > 1 => {
                ((content_width - total_width_widget) / (self.widgets.len() as f32 - 1.0)).max(0.0)
            }
            _ => self.spacing,
        };

        let total_width =
            total_width_widget + spacing * (self.widgets.len().saturating_sub(1)) as f32;

        let mut cursor_x = match self.justification {
            Justification::Start | Justification::SpaceBetween => ctx.cursor.x + self.padding.x,
            Justification::Center => {
                ctx.cursor.x + self.padding.x + (content_width - total_width) / 2.0
            }
            Justification::End => ctx.cursor.x + ctx.max_size.x - self.padding.y - total_width,
        };

        for widget in self.widgets.iter_mut() {
            let widget_size = widget.size_hint();
            let offset_y = match self.alignment {
                Alignment::Start => self.padding.z,
                Alignment::Center => self.padding.z + (content_height - widget_size.y) / 2.0,
                Alignment::End => ctx.max_size.y - self.padding.w - widget_size.y,
            };

            widget.layout(&LayoutContext {
                max_size: widget_size,
                cursor: Vec2::new(cursor_x, ctx.cursor.y + offset_y),
            });
            cursor_x += widget_size.x + spacing;
        }

        Vec2::new(
            total_width + self.padding.x + self.padding.y,
            ctx.max_size.y,
        )
    }

    fn draw(&self, list: &mut DrawList) {
        for widget in &self.widgets {
            widget.draw(list);
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.widgets
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.widgets
    }
}

/// A stack container that overlays its child widgets on top of each other.
pub struct Stack {
    pub widgets: Vec<Box<dyn Widget>>,
    pub align_x: Alignment,
    pub align_y: Alignment,
    pub padding: f32,
}

impl Stack {
    /// Creates a new `Stack` container.
    pub fn new(align_x: Alignment, align_y: Alignment, padding: f32) -> Self {
        Self {
            widgets: Vec::new(),
            align_x,
            align_y,
            padding,
        }
    }
}

impl Widget for Stack {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn size_hint(&self) -> Vec2 {
        let mut size = Vec2::ZERO;
        for widget in &self.widgets {
            size = size.max(widget.size_hint());
        }
        size + Vec2::splat(self.padding * 2.0)
    }

    fn update(&mut self, ctx: &UpdateContext) {
        for widget in &mut self.widgets {
            widget.update(ctx);
        }
    }

    fn layout(&mut self, ctx: &LayoutContext) -> Vec2 {
        let mut max_width: f32 = 0.0;
        let mut max_height: f32 = 0.0;

        for widget in &mut self.widgets {
            let widget_size = widget.size_hint();
            let offset_x = match self.align_x {
                Alignment::Start => self.padding,
                Alignment::Center => (ctx.max_size.x - widget_size.x) / 2.0,
                Alignment::End => ctx.max_size.x - self.padding - widget_size.x,
            };
            let offset_y = match self.align_y {
                Alignment::Start => self.padding,
                Alignment::Center => (ctx.max_size.y - widget_size.y) / 2.0,
                Alignment::End => ctx.max_size.y - self.padding - widget_size.y,
            };

            let final_size = widget.layout(&LayoutContext {
                max_size: widget_size,
                cursor: ctx.cursor + Vec2::new(offset_x, offset_y),
            });
            max_width = max_width.max(offset_x + final_size.x);
            max_height = max_height.max(offset_y + final_size.y);
        }

        Vec2::new(max_width + self.padding, max_height + self.padding)
    }

    fn draw(&self, list: &mut DrawList) {
        for widget in &self.widgets {
            widget.draw(list);
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.widgets
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.widgets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Label, Spacer, testing::font};

    #[test]
    fn test_column_centers_children() {
        let mut column = Column::new(10.0, Alignment::Center, Vec4::ZERO, Justification::Start);
        column.add_widget(Spacer::new(Vec2::new(100.0, 20.0)));
        column.add_widget(Spacer::new(Vec2::new(50.0, 30.0)));
        assert_eq!(column.size_hint(), Vec2::new(100.0, 60.0));

        let mut row = Row::new(0.0, Alignment::Start, Vec4::ZERO, Justification::Start);
        row.add_widget(column);
        row.layout(&LayoutContext::window(Vec2::new(400.0, 300.0)));

        let column = row.get_widget::<Column>(0).unwrap();
        assert_eq!(column.len(), 2);
    }

    #[test]
    fn test_space_between_spreads_children() {
        let font = font();
        let mut row = Row::new(
            0.0,
            Alignment::Start,
            Vec4::new(10.0, 10.0, 0.0, 0.0),
            Justification::SpaceBetween,
        );
        row.add_widget(Label::new("ab", 8.0, Vec4::ONE, &font));
        row.add_widget(Label::new("cd", 8.0, Vec4::ONE, &font));
        row.layout(&LayoutContext::window(Vec2::new(200.0, 50.0)));

        assert_eq!(row.get_widget::<Label>(0).unwrap().position, Vec2::new(10.0, 0.0));
        assert_eq!(row.get_widget::<Label>(1).unwrap().position, Vec2::new(174.0, 0.0));
    }

    #[test]
    fn test_find_widget_through_nested_containers() {
        let font = font();
        let mut inner = Row::new(0.0, Alignment::Start, Vec4::ZERO, Justification::Start);
        inner.add_widget(Spacer::new(Vec2::ONE));
        inner.add_widget(Label::new("deep", 8.0, Vec4::ONE, &font));
        let mut column = Column::new(0.0, Alignment::Start, Vec4::ZERO, Justification::Start);
        column.add_widget(Spacer::new(Vec2::ONE));
        column.add_widget(inner);

        assert_eq!(
            column
                .find_widget::<Label>(&[1, 1])
                .map(|label| label.text.stripped()),
            Some("deep".to_string())
        );
        assert!(column.find_widget::<Label>(&[1, 0]).is_none());
        assert!(column.find_widget::<Label>(&[5]).is_none());

        column.find_widget_mut::<Label>(&[1, 1]).unwrap().set_text("changed");
        assert_eq!(
            column.find_widget::<Label>(&[1, 1]).unwrap().text.stripped(),
            "changed"
        );
    }

    #[test]
    fn test_column_justification_and_alignment() {
        let font = font();
        let mut column = Column::new(
            0.0,
            Alignment::End,
            Vec4::new(0.0, 4.0, 0.0, 6.0),
            Justification::End,
        );
        column.add_widget(Label::new("abc", 8.0, Vec4::ONE, &font));
        column.layout(&LayoutContext::window(Vec2::new(100.0, 100.0)));

        let label = column.get_widget::<Label>(0).unwrap();
        assert_eq!(label.position, Vec2::new(72.0, 86.0));
    }

    #[test]
    fn test_stack_centers_overlay() {
        let font = font();
        let mut stack = Stack::new(Alignment::Center, Alignment::Center, 0.0);
        stack.add_widget(Label::new("ab", 8.0, Vec4::ONE, &font));
        stack.layout(&LayoutContext::window(Vec2::new(100.0, 50.0)));
        assert_eq!(
            stack.get_widget::<Label>(0).unwrap().position,
            Vec2::new(42.0, 21.0)
        );
    }
}
