// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that reports where its content sits on screen.
//!
//! Iced does not tell an application where a widget was laid out. The probe
//! sees its own bounds and the visible viewport while processing events and
//! publishes a message whenever either changes, plus one on every window
//! resize. Inside a scrollable both rectangles are in content coordinates, so
//! their intersection stays meaningful.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{window, Element, Event, Length, Rectangle, Size};

/// Bounds of the probed content and the viewport it is visible through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub bounds: Rectangle,
    pub viewport: Rectangle,
}

/// What the probe observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbeEvent {
    /// Content bounds or viewport changed.
    Layout(Geometry),
    /// The window hosting the content was resized.
    DisplayResized(Size),
}

#[derive(Debug, Default)]
struct State {
    last: Option<Geometry>,
}

impl State {
    /// Records `geometry`, returning true if it differs from the last one.
    fn observe(&mut self, geometry: Geometry) -> bool {
        if self.last == Some(geometry) {
            return false;
        }
        self.last = Some(geometry);
        true
    }
}

/// A widget that wraps content and reports its on-screen geometry.
pub struct VisibilityProbe<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_change: Box<dyn Fn(ProbeEvent) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> VisibilityProbe<'a, Message, Theme, Renderer> {
    /// Creates a new `VisibilityProbe` wrapping the given content.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        on_change: impl Fn(ProbeEvent) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            on_change: Box::new(on_change),
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for VisibilityProbe<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if let Event::Window(window::Event::Resized(size)) = event {
            shell.publish((self.on_change)(ProbeEvent::DisplayResized(*size)));
        }

        let geometry = Geometry {
            bounds: layout.bounds(),
            viewport: *viewport,
        };
        if tree.state.downcast_mut::<State>().observe(geometry) {
            shell.publish((self.on_change)(ProbeEvent::Layout(geometry)));
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<VisibilityProbe<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(probe: VisibilityProbe<'a, Message, Theme, Renderer>) -> Self {
        Self::new(probe)
    }
}

/// Helper function to wrap content in a visibility probe.
pub fn visibility_probe<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_change: impl Fn(ProbeEvent) -> Message + 'a,
) -> VisibilityProbe<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    VisibilityProbe::new(content, on_change)
}
