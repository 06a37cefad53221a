#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::dispatch::SetState;
    use crate::hooks::Pass;
    use crate::queue::UpdateQueue;
    use crate::runtime::Instance;

    fn counter(pass: &mut Pass<'_>) -> (i32, SetState<i32>) {
        pass.use_state(|| 0)
    }

    fn counter_with_label(pass: &mut Pass<'_>) -> (i32, SetState<i32>, String, SetState<String>) {
        let (count, set_count) = pass.use_state(|| 0);
        let (label, set_label) = pass.use_state(|| "a".to_string());
        (count, set_count, label, set_label)
    }

    #[test]
    fn test_queue_drains_in_enqueue_order() {
        let queue: UpdateQueue<String> = UpdateQueue::new();
        queue.enqueue(Box::new(|s| s + "a"));
        queue.enqueue(Box::new(|s| s + "b"));
        queue.enqueue(Box::new(|s| s + "c"));
        assert_eq!(queue.pending_len(), 3);

        assert_eq!(queue.drain_into(String::new()), "abc");
        assert!(queue.is_empty());
    }

    #[test]
    fn test_empty_queue_drain_is_noop() {
        let queue: UpdateQueue<i32> = UpdateQueue::new();
        assert_eq!(queue.drain_into(41), 41);
        assert_eq!(queue.drain_into(41), 41);
    }

    #[test]
    fn test_mount_returns_initial_state() {
        let mut instance = Instance::new();
        assert!(!instance.has_rendered());

        let (count, _set) = instance.render(counter);
        assert_eq!(count, 0);
        assert_eq!(instance.hook_count(), 1);
        assert!(instance.has_rendered());
    }

    #[test]
    fn test_single_dispatch_applies_on_next_render() {
        let mut instance = Instance::new();
        let (_, set_count) = instance.render(counter);

        set_count.dispatch(|n| n + 1);

        let (count, _) = instance.render(counter);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_batched_dispatches_fold_left_in_order() {
        let mut instance = Instance::new();
        let (_, set_count) = instance.render(counter);

        set_count.dispatch(|n| n + 1);
        set_count.dispatch(|n| n * 2);

        let (count, _) = instance.render(counter);
        assert_eq!(count, 2); // (0 + 1) * 2, not 0 * 2 + 1
    }

    #[test]
    fn test_two_hooks_keep_their_positions() {
        let mut instance = Instance::new();
        let (count, _, label, set_label) = instance.render(counter_with_label);
        assert_eq!(count, 0);
        assert_eq!(label, "a");
        assert_eq!(instance.hook_count(), 2);

        // Only the second slot gets an update.
        set_label.dispatch(|s| s + "'");

        let (count, set_count, label, _) = instance.render(counter_with_label);
        assert_eq!(count, 0);
        assert_eq!(label, "a'");
        assert_eq!(set_count.pending_len(), 0);
    }

    #[test]
    fn test_rerender_without_dispatch_changes_nothing() {
        let mut instance = Instance::new();
        let (_, set_count) = instance.render(counter);
        set_count.dispatch(|n| n + 5);
        instance.render(counter);

        for _ in 0..3 {
            let (count, _) = instance.render(counter);
            assert_eq!(count, 5);
            assert_eq!(instance.hook_count(), 1);
        }
    }

    #[test]
    fn test_dispatcher_outlives_many_renders() {
        let mut instance = Instance::new();
        let (_, set_count) = instance.render(counter);

        for _ in 0..5 {
            instance.render(counter);
        }

        set_count.dispatch(|n| n + 3);
        let (count, _) = instance.render(counter);
        assert_eq!(count, 3);
    }

    #[test]
    fn test_set_replaces_accumulated_state() {
        let mut instance = Instance::new();
        let (_, set_count) = instance.render(counter);

        set_count.dispatch(|n| n + 1);
        set_count.set(10);
        set_count.dispatch(|n| n * 2);

        let (count, _) = instance.render(counter);
        assert_eq!(count, 20);
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let mut left = Instance::new();
        let mut right = Instance::new();
        let (_, set_left) = left.render(counter);
        right.render(counter);

        set_left.dispatch(|n| n + 9);
        assert!(left.needs_render());
        assert!(!right.needs_render());

        let (l, _) = left.render(counter);
        let (r, _) = right.render(counter);
        assert_eq!(l, 9);
        assert_eq!(r, 0);
    }

    #[test]
    fn test_render_clears_request_and_dispatch_raises_it() {
        let mut instance = Instance::new();
        let (_, set_count) = instance.render(counter);
        assert!(!instance.needs_render());

        set_count.dispatch(|n| n + 1);
        assert!(instance.needs_render());

        assert_eq!(instance.render_if_needed(counter).map(|(c, _)| c), Some(1));
        assert!(!instance.needs_render());
        assert!(instance.render_if_needed(counter).is_none());
    }

    #[test]
    fn test_dispatch_during_render_requests_another_pass() {
        fn self_bumping(pass: &mut Pass<'_>) -> i32 {
            let (count, set_count) = pass.use_state(|| 0);
            if count == 0 {
                set_count.dispatch(|n| n + 1);
            }
            count
        }

        let mut instance = Instance::new();
        assert_eq!(instance.render(self_bumping), 0);
        assert!(instance.needs_render());

        assert_eq!(instance.render(self_bumping), 1);
        assert!(!instance.needs_render());
    }

    #[test]
    fn test_waker_fires_on_dispatch() {
        let mut instance = Instance::new();
        let woken = Rc::new(Cell::new(0u32));
        instance.set_waker({
            let woken = woken.clone();
            move || woken.set(woken.get() + 1)
        });

        let (_, set_count) = instance.render(counter);
        assert_eq!(woken.get(), 0);

        set_count.dispatch(|n| n + 1);
        set_count.dispatch(|n| n + 1);
        assert_eq!(woken.get(), 2);
    }

    #[test]
    fn test_update_pass_overrun_mounts_replacement() {
        let mut instance = Instance::new();
        instance.render(counter);
        assert_eq!(instance.hook_count(), 1);

        // An extra call on an update pass runs past the chain; the slot is
        // recovered instead of poisoning the pass.
        let (count, extra) = instance.render(|pass: &mut Pass<'_>| {
            let (count, _) = pass.use_state(|| 0);
            let (extra, _) = pass.use_state(|| 100);
            (count, extra)
        });
        assert_eq!(count, 0);
        assert_eq!(extra, 100);
        assert_eq!(instance.hook_count(), 2);
    }

    #[test]
    fn test_slot_type_change_mounts_replacement() {
        let mut instance = Instance::new();
        instance.render(counter);

        let (text, set_text) =
            instance.render(|pass: &mut Pass<'_>| pass.use_state(|| "fresh".to_string()));
        assert_eq!(text, "fresh");
        assert_eq!(instance.hook_count(), 1);

        // The replacement behaves like any other slot afterwards.
        set_text.dispatch(|s| s + "!");
        let (text, _) =
            instance.render(|pass: &mut Pass<'_>| pass.use_state(|| "fresh".to_string()));
        assert_eq!(text, "fresh!");
    }
}
