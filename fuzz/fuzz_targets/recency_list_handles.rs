#![no_main]

use libfuzzer_sys::fuzz_target;
use rusty_lru::ds::{IntrusiveList, SlotId};

// Fuzz IntrusiveList with a mix of live and freed handles.
//
// Freed handles are kept around and replayed; once freed, a handle must stay
// dead even after its slot index is reused.
fuzz_target!(|data: &[u8]| {
    let mut list: IntrusiveList<u32> = IntrusiveList::new();
    let mut live: Vec<SlotId> = Vec::new();
    let mut dead: Vec<SlotId> = Vec::new();

    for pair in data.chunks_exact(2) {
        let (op, arg) = (pair[0] % 9, pair[1]);
        let value = u32::from(arg);

        match op {
            0 => {
                let id = list.push_front(value);
                assert_eq!(list.front_id(), Some(id));
                live.push(id);
            },
            1 => {
                let id = list.push_back(value);
                assert_eq!(list.back_id(), Some(id));
                live.push(id);
            },
            2 | 3 if !live.is_empty() => {
                let id = live[usize::from(arg) % live.len()];
                if op == 2 {
                    assert!(list.move_to_front(id));
                    assert_eq!(list.front_id(), Some(id));
                } else {
                    assert!(list.move_to_back(id));
                    assert_eq!(list.back_id(), Some(id));
                }
            },
            4 if !live.is_empty() => {
                let id = live.swap_remove(usize::from(arg) % live.len());
                assert!(list.remove(id).is_some());
                dead.push(id);
            },
            5 => {
                if let Some(id) = list.back_id() {
                    assert!(list.pop_back().is_some());
                    live.retain(|live_id| *live_id != id);
                    dead.push(id);
                }
            },
            6 => {
                if let Some(id) = list.front_id() {
                    assert!(list.pop_front().is_some());
                    live.retain(|live_id| *live_id != id);
                    dead.push(id);
                }
            },
            7 if !dead.is_empty() => {
                // stale handles are inert
                let id = dead[usize::from(arg) % dead.len()];
                let before: Vec<SlotId> = list.iter_ids().collect();
                assert!(!list.contains(id));
                assert!(list.get(id).is_none());
                assert!(!list.move_to_front(id));
                assert!(list.remove(id).is_none());
                assert_eq!(list.iter_ids().collect::<Vec<_>>(), before);
            },
            8 => {
                list.clear();
                dead.append(&mut live);
            },
            _ => {},
        }

        assert_eq!(list.len(), live.len());
        assert_eq!(list.is_empty(), live.is_empty());
    }

    let forward: Vec<u32> = list.iter().copied().collect();
    let mut backward: Vec<u32> = list.iter().rev().copied().collect();
    backward.reverse();
    assert_eq!(forward, backward);
    assert_eq!(list.iter().len(), list.len());
});
