//! The traditional UK bingo calls for balls 1–90.

/// Calls indexed by ball number minus one.
const CALLS: [&str; 90] = [
    "Kelly's eye",          // 1
    "One little duck",      // 2
    "Cup of tea",           // 3
    "Knock at the door",    // 4
    "Man alive",            // 5
    "Half a dozen",         // 6
    "Lucky seven",          // 7
    "Garden gate",          // 8
    "Doctor's orders",      // 9
    "Cock and hen",         // 10
    "Legs eleven",          // 11
    "One dozen",            // 12
    "Unlucky for some",     // 13
    "Valentine's Day",      // 14
    "Young and keen",       // 15
    "Sweet sixteen",        // 16
    "Dancing queen",        // 17
    "Coming of age",        // 18
    "Goodbye teens",        // 19
    "One score",            // 20
    "Key of the door",      // 21
    "Two little ducks",     // 22
    "Thee and me",          // 23
    "Two dozen",            // 24
    "Duck and dive",        // 25
    "Pick and mix",         // 26
    "Gateway to heaven",    // 27
    "In a state",           // 28
    "Rise and shine",       // 29
    "Dirty Gertie",         // 30
    "Get up and run",       // 31
    "Buckle my shoe",       // 32
    "All the threes",       // 33
    "Ask for more",         // 34
    "Jump and jive",        // 35
    "Three dozen",          // 36
    "More than eleven",     // 37
    "Christmas cake",       // 38
    "Steps",                // 39
    "Life begins",          // 40
    "Time for fun",         // 41
    "Winnie the Pooh",      // 42
    "Down on your knees",   // 43
    "Droopy drawers",       // 44
    "Halfway there",        // 45
    "Up to tricks",         // 46
    "Four and seven",       // 47
    "Four dozen",           // 48
    "PC",                   // 49
    "Half a century",       // 50
    "Tweak of the thumb",   // 51
    "Chicken vindaloo",     // 52
    "Here comes Herbie",    // 53
    "Clean the floor",      // 54
    "Snakes alive",         // 55
    "Was she worth it",     // 56
    "Heinz varieties",      // 57
    "Make them wait",       // 58
    "Brighton line",        // 59
    "Five dozen",           // 60
    "Bakers bun",           // 61
    "Tickety-boo",          // 62
    "Tickle me",            // 63
    "Red raw",              // 64
    "Old age pension",      // 65
    "Clickety click",       // 66
    "Stairway to heaven",   // 67
    "Saving grace",         // 68
    "Either way up",        // 69
    "Three score and ten",  // 70
    "Bang on the drum",     // 71
    "Six dozen",            // 72
    "Queen bee",            // 73
    "Candy store",          // 74
    "Strive and strive",    // 75
    "Trombones",            // 76
    "Sunset strip",         // 77
    "Heaven's gate",        // 78
    "One more time",        // 79
    "Eight and blank",      // 80
    "Stop and run",         // 81
    "Straight on through",  // 82
    "Time for tea",         // 83
    "Seven dozen",          // 84
    "Staying alive",        // 85
    "Between the sticks",   // 86
    "Torquay in Devon",     // 87
    "Two fat ladies",       // 88
    "Nearly there",         // 89
    "Top of the shop",      // 90
];

/// The traditional call for `number`, or `None` outside 1..=90.
pub fn call_for(number: u8) -> Option<&'static str> {
    match number {
        1..=90 => Some(CALLS[usize::from(number) - 1]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_calls() {
        assert_eq!(call_for(1), Some("Kelly's eye"));
        assert_eq!(call_for(22), Some("Two little ducks"));
        assert_eq!(call_for(88), Some("Two fat ladies"));
        assert_eq!(call_for(90), Some("Top of the shop"));
    }

    #[test]
    fn out_of_range_has_no_call() {
        assert_eq!(call_for(0), None);
        assert_eq!(call_for(91), None);
        assert_eq!(call_for(u8::MAX), None);
    }

    #[test]
    fn every_ball_has_a_non_empty_call() {
        for n in 1..=90u8 {
            let call = call_for(n);
            assert!(
                call.is_some_and(|c| !c.is_empty()),
                "Ball {n} has no call"
            );
        }
    }
}
