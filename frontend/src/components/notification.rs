use gloo::timers::callback::Timeout;
use shared::{Notice, NoticeKind};
use yew::prelude::*;

/// A notice as it was shown. `seq` differs for every call to
/// [`NoticeCounter::stamp`], so the same message shown twice still counts as new.
#[derive(Debug, Clone, PartialEq)]
pub struct ShownNotice {
    pub seq: u64,
    pub notice: Notice,
}

#[derive(Debug, Default)]
pub struct NoticeCounter {
    next: u64,
}

impl NoticeCounter {
    pub fn stamp(&mut self, notice: Notice) -> ShownNotice {
        self.next += 1;
        ShownNotice {
            seq: self.next,
            notice,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub notice: Option<ShownNotice>,
    pub duration_ms: u32,
    pub on_dismiss: Callback<()>,
}

/// Banner for the latest success or error message. Hides itself after
/// `duration_ms`; a newer notice restarts the timer.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let duration_ms = props.duration_ms;
        let seq = props.notice.as_ref().map(|shown| shown.seq);
        use_effect_with(seq, move |seq| {
            let timeout = seq
                .map(|_| Timeout::new(duration_ms, move || on_dismiss.emit(())));
            // Dropping the timeout cancels it
            move || drop(timeout)
        });
    }

    let Some(ShownNotice { notice, .. }) = props.notice.as_ref() else {
        return html! {};
    };

    let class = match notice.kind {
        NoticeKind::Success => "notification success",
        NoticeKind::Error => "notification error",
    };
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div id="notification" class={class} role="status">
            <span>{&notice.message}</span>
            <button class="notification-close" onclick={on_close}>{"×"}</button>
        </div>
    }
}
