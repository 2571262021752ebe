//! A generator is read-only after construction and can be shared between
//! threads without locking.

use std::sync::Arc;
use std::thread;

use munemo::Generator;

#[test]
fn shared_generator_across_threads() {
    let generator = Arc::new(Generator::new());

    let handles = (0..8i64)
        .map(|worker| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || {
                for value in (worker * 10_000)..((worker + 1) * 10_000) {
                    let token = generator.encode(-value);
                    assert_eq!(generator.decode(&token), Ok(-value));
                }
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        handle.join().unwrap();
    }
}
