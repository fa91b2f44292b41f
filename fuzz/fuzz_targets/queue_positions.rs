#![no_main]

use arbitrary::Arbitrary;
use hospital_queue::{EntryStatus, HospitalQueueContract, HospitalQueueContractClient};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{testutils::Ledger, Env, String};

#[derive(Arbitrary, Debug)]
enum Action {
    Add { queue: u8, patient: u8 },
    Remove { pick: u8 },
    SetStatus { pick: u8, status: u8 },
    Move { pick: u8, queue: u8 },
    CallNext { queue: u8 },
    DeleteQueue { queue: u8 },
    Tick { seconds: u16 },
}

const QUEUES: u64 = 3;

fn status(raw: u8) -> EntryStatus {
    match raw % 4 {
        0 => EntryStatus::Waiting,
        1 => EntryStatus::InProgress,
        2 => EntryStatus::Completed,
        _ => EntryStatus::Canceled,
    }
}

fuzz_target!(|actions: Vec<Action>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = 1_696_929_300);

    let contract_id = env.register(HospitalQueueContract, ());
    let client = HospitalQueueContractClient::new(&env, &contract_id);

    let department = client.create_department(
        &String::from_str(&env, "Pronto-Socorro"),
        &String::from_str(&env, ""),
    );
    let mut queue_ids = std::vec::Vec::new();
    for name in ["Triagem", "Consultas", "Exames"] {
        let view = client.create_queue(
            &String::from_str(&env, name),
            &String::from_str(&env, ""),
            &department.id,
        );
        queue_ids.push(view.queue.id);
    }

    // Every entry id ever handed out, live or not
    let mut issued: std::vec::Vec<u64> = std::vec::Vec::new();
    let pick = |issued: &std::vec::Vec<u64>, raw: u8| -> Option<u64> {
        if issued.is_empty() {
            None
        } else {
            Some(issued[raw as usize % issued.len()])
        }
    };

    for action in actions.into_iter().take(64) {
        match action {
            Action::Add { queue, patient } => {
                let queue_id = queue_ids[(queue as u64 % QUEUES) as usize];
                let tail = client
                    .list_by_queue(&queue_id)
                    .iter()
                    .map(|view| view.entry.position)
                    .max()
                    .unwrap_or(0);
                if let Ok(Ok(entry)) =
                    client.try_add_entry(&queue_id, &u64::from(patient), &None, &None)
                {
                    assert_eq!(entry.position, tail + 1);
                    issued.push(entry.id);
                }
            }
            Action::Remove { pick: raw } => {
                if let Some(id) = pick(&issued, raw) {
                    let _ = client.remove_entry(&id);
                }
            }
            Action::SetStatus { pick: raw, status: next } => {
                if let Some(id) = pick(&issued, raw) {
                    if let Ok(Ok(before)) = client.try_get_entry(&id) {
                        let result = client.try_set_status(&id, &status(next));
                        if let Ok(Ok(after)) = result {
                            assert!(before.status.can_transition_to(after.status));
                            assert_eq!(after.position, before.position);
                            assert!(after.revision > before.revision);
                        } else {
                            assert_eq!(client.get_entry(&id), before);
                        }
                    }
                }
            }
            Action::Move { pick: raw, queue } => {
                if let Some(id) = pick(&issued, raw) {
                    let target = queue_ids[(queue as u64 % QUEUES) as usize];
                    if let Ok(Ok(moved)) = client.try_move_entry(&id, &target) {
                        assert_eq!(moved.status, EntryStatus::Waiting);
                        issued.push(moved.id);
                    }
                }
            }
            Action::CallNext { queue } => {
                let queue_id = queue_ids[(queue as u64 % QUEUES) as usize];
                let _ = client.try_call_next(&queue_id);
            }
            Action::DeleteQueue { queue } => {
                let queue_id = queue_ids[(queue as u64 % QUEUES) as usize];
                let _ = client.delete_queue(&queue_id);
            }
            Action::Tick { seconds } => {
                env.ledger()
                    .with_mut(|li| li.timestamp += u64::from(seconds));
            }
        }

        for queue_id in &queue_ids {
            let listed = client.list_by_queue(queue_id);
            let mut previous = 0u32;
            for view in listed.iter() {
                assert_eq!(view.entry.queue_id, *queue_id);
                assert!(view.entry.position > previous);
                previous = view.entry.position;
            }
        }
    }
});
