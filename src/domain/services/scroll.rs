#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

use ratatui::widgets::ScrollbarState;

#[derive(Default)]
pub struct Scroll {
    list_length: u16,
    viewport_length: u16,
    target: Option<u16>,
    follow_last: bool,
    pub position: u16,
    pub scrollbar_state: ScrollbarState,
}

impl Scroll {
    pub fn up(&mut self) {
        self.target = None;
        self.follow_last = false;
        self.position = self.position.saturating_sub(1);
        self.scrollbar_state.prev();
    }

    pub fn up_page(&mut self) {
        for _ in 0..10 {
            self.up();
        }
    }

    pub fn down(&mut self) {
        self.target = None;
        self.follow_last = false;
        self.position = self.position.saturating_add(1).clamp(0, self.max_position());
        self.scrollbar_state.next();
    }

    pub fn down_page(&mut self) {
        for _ in 0..10 {
            self.down();
        }
    }

    /// Starts moving the viewport towards the newest line. The position then
    /// advances on each call to `step`. The viewport keeps following the
    /// bottom through later resizes until the user scrolls manually.
    pub fn animate_to_last(&mut self) {
        self.follow_last = true;
        self.retarget_last();
    }

    fn retarget_last(&mut self) {
        let target = self.max_position();
        if target == self.position {
            self.target = None;
            return;
        }

        self.target = Some(target);
    }

    pub fn is_animating(&self) -> bool {
        return self.target.is_some();
    }

    /// Advances an ongoing animation by one frame. Each frame covers half of
    /// the remaining distance, at least one line.
    pub fn step(&mut self) {
        let target = match self.target {
            Some(target) => target,
            None => return,
        };

        if self.position < target {
            let distance = target - self.position;
            self.position += (distance / 2).max(1);
        } else if self.position > target {
            let distance = self.position - target;
            self.position -= (distance / 2).max(1);
        }

        if self.position == target {
            self.target = None;
        }

        self.scrollbar_state = self.scrollbar_state.position(usize::from(self.position));
    }

    pub fn set_state(&mut self, list_length: u16, viewport_length: u16) {
        self.list_length = list_length;
        self.viewport_length = viewport_length;
        self.position = self.position.clamp(0, self.max_position());
        if self.follow_last {
            self.retarget_last();
        } else if let Some(target) = self.target {
            self.target = Some(target.clamp(0, self.max_position()));
        }

        self.scrollbar_state = self
            .scrollbar_state
            .content_length(usize::from(list_length))
            .viewport_content_length(usize::from(viewport_length))
            .position(usize::from(self.position));
    }

    fn max_position(&self) -> u16 {
        return self.list_length.saturating_sub(self.viewport_length);
    }
}
