//! Linked list walkthrough - a playlist edited in place
//!
//! This example exercises the list's O(1) end operations, cursor removal and sorting,
//! then drains the result through a queue.

use wellspring::{doubly_linked_list, DoublyLinkedList, Queue};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Track {
    plays: u32,
    title: &'static str,
}

fn track(title: &'static str, plays: u32) -> Track {
    Track { plays, title }
}

fn show(label: &str, list: &DoublyLinkedList<Track>) {
    let titles: Vec<_> = list.iter().map(|t| t.title).collect();
    println!("  {:<10} {}", label, titles.join(" -> "));
}

fn main() {
    println!("=== Playlist Editing ===\n");

    let mut playlist = doubly_linked_list![
        track("Intro", 12),
        track("Skit", 1),
        track("Anthem", 940),
    ];
    show("initial", &playlist);

    playlist.push_back(track("Encore", 311));
    playlist.push_front(track("Soundcheck", 0));
    show("extended", &playlist);

    // Drop everything with fewer than ten plays through the cursor
    {
        let mut cursor = playlist.cursor_mut();
        while let Some(current) = cursor.next() {
            if current.plays < 10 {
                if let Ok(removed) = cursor.remove() {
                    println!("  removed    {}", removed.title);
                }
            }
        }
    }
    show("pruned", &playlist);

    let by_plays = playlist.sorted_by(|a, b| b.plays.cmp(&a.plays));
    show("by plays", &by_plays);
    show("original", &playlist);

    let backwards: Vec<_> = playlist.iter().rev().map(|t| t.title).collect();
    println!("  {:<10} {}", "reversed", backwards.join(" <- "));

    println!("\n---\n");

    println!("Queueing for playback");
    let mut queue: Queue<Track> = by_plays.into_iter().collect();
    if let Ok(next) = queue.peek() {
        println!("  up next: {}", next.title);
    }
    while let Some(t) = queue.dequeue() {
        println!("  ▶ {} ({} plays)", t.title, t.plays);
    }

    println!("\n=== Done ===");
}
