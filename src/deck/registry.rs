//! The slide registry.
//!
//! An ordered, immutable table of the 20 slides in the deck. Visual slides
//! carry a view factory; theory slides (and the finale) carry static
//! content. The interleaving - one animated demo, then the theory panel that
//! explains it - is the course structure and must not be reordered.

use crate::slides::{self, SlideView};

// =============================================================================
// TYPES
// =============================================================================

/// What kind of slide a record is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    /// An interactive animated demo.
    Visual,
    /// A static explanation panel.
    Theory,
    /// The finale panel.
    End,
}

/// Visual flavor of a tip box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipKind {
    Info,
    Warning,
    Fun,
}

/// A callout box under a theory panel.
#[derive(Debug, Clone, Copy)]
pub struct Tip {
    pub title: &'static str,
    pub body: &'static str,
    pub kind: TipKind,
}

/// Static content of a theory slide.
#[derive(Debug, Clone, Copy)]
pub struct TheoryContent {
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
    pub code: Option<&'static str>,
    pub tip: Option<Tip>,
}

/// A slide's body: either a factory for a live demo view, or static content.
pub enum SlideBody {
    Visual(fn() -> Box<dyn SlideView>),
    Theory(TheoryContent),
}

/// One slide in the deck.
pub struct SlideRecord {
    /// Unique, sequence-order-defining id (1-based).
    pub id: u8,
    pub kind: SlideKind,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: SlideBody,
}

/// The full deck, in course order.
pub fn slides() -> &'static [SlideRecord] {
    &SLIDES
}

// =============================================================================
// THE DECK
// =============================================================================

static SLIDES: [SlideRecord; 20] = [
    // Module 1: Genesis
    SlideRecord {
        id: 1,
        kind: SlideKind::Visual,
        title: "The Blueprint vs. The Life",
        subtitle: "Class vs Object",
        body: SlideBody::Visual(slides::blueprint::build),
    },
    SlideRecord {
        id: 2,
        kind: SlideKind::Theory,
        title: "Memory Allocation",
        subtitle: "Where do monsters live?",
        body: SlideBody::Theory(TheoryContent {
            paragraphs: &[
                "A class is just paper (a blueprint). It cannot bite you. \
                 The object is the real monster, created in memory.",
            ],
            bullets: &[
                "Stack: holds the reference (the remote control). Fast and small. Monster m;",
                "Heap: holds the physical monster. The big space. new Monster();",
            ],
            code: None,
            tip: Some(Tip {
                title: "Did you know?",
                body: "C# was almost named \"Cool\" (C-like Object Oriented Language). \
                       Then someone noticed the file extension would have been .cool, \
                       which did not sound very corporate. They settled on C#, the musical note.",
                kind: TipKind::Fun,
            }),
        }),
    },
    // Module 2: Birth
    SlideRecord {
        id: 3,
        kind: SlideKind::Visual,
        title: "Frankenstein's Laboratory",
        subtitle: "The Constructor",
        body: SlideBody::Visual(slides::constructor::build),
    },
    SlideRecord {
        id: 4,
        kind: SlideKind::Theory,
        title: "Birth (Constructors)",
        subtitle: "The first scream",
        body: SlideBody::Theory(TheoryContent {
            paragraphs: &[
                "A constructor is a special method that runs AUTOMATICALLY \
                 when you use the new keyword.",
                "Its job? Initialize the data (HP, Name) so you never meet an \
                 \"empty\" (null) monster.",
            ],
            bullets: &[],
            code: Some(
                "class Monster {\n  public int Hp;\n  // Constructor (same name as the class)\n  public Monster() {\n    Hp = 100; // Full tank!\n  }\n}",
            ),
            tip: Some(Tip {
                title: "Pro Tip",
                body: "A constructor has no return type. Write 'void Monster()' and it \
                       becomes a plain method - not a constructor anymore!",
                kind: TipKind::Info,
            }),
        }),
    },
    // Module 3: Family
    SlideRecord {
        id: 5,
        kind: SlideKind::Visual,
        title: "The Family Tree (DNA)",
        subtitle: "Inheritance",
        body: SlideBody::Visual(slides::inheritance::build),
    },
    SlideRecord {
        id: 6,
        kind: SlideKind::Theory,
        title: "Rules of Inheritance",
        subtitle: "Who are your parents?",
        body: SlideBody::Theory(TheoryContent {
            paragraphs: &[
                "The child (derived class) inherits every field and method of the \
                 parent (base class). A Vampire gets Hp from Monster for free.",
            ],
            bullets: &[],
            code: Some(
                "class Vampire : Monster {\n  // Already has Hp and Roar()\n  public void Fly() { ... }\n}",
            ),
            tip: Some(Tip {
                title: "Single Inheritance Rule",
                body: "In C#, a class gets exactly ONE parent (base class). You cannot be \
                       half Vampire, half Zombie. No hybrids allowed!",
                kind: TipKind::Warning,
            }),
        }),
    },
    // Module 4: Order
    SlideRecord {
        id: 7,
        kind: SlideKind::Visual,
        title: "The Order of Creation",
        subtitle: "Skeleton vs. Skin",
        body: SlideBody::Visual(slides::chain::build),
    },
    SlideRecord {
        id: 8,
        kind: SlideKind::Theory,
        title: "Constructor Chaining",
        subtitle: "base()",
        body: SlideBody::Theory(TheoryContent {
            paragraphs: &[
                "Constructors are NOT inherited! They are called in a chain.",
                "When you create a new Zombie():",
            ],
            bullets: &[
                "1. The base constructor runs (the skeleton)",
                "2. The derived constructor runs (the flesh)",
            ],
            code: Some(
                "public Zombie(string name) : base(name) {\n  // Explicitly calls the parent constructor\n}",
            ),
            tip: Some(Tip {
                title: "Pro Tip",
                body: "Without : base(), C# calls the parent's parameterless constructor. \
                       If the parent doesn't have one, the build breaks.",
                kind: TipKind::Info,
            }),
        }),
    },
    // Module 5: Personality
    SlideRecord {
        id: 9,
        kind: SlideKind::Visual,
        title: "The Talent Show",
        subtitle: "Run-time Polymorphism",
        body: SlideBody::Visual(slides::chorus::build),
    },
    SlideRecord {
        id: 10,
        kind: SlideKind::Theory,
        title: "Polymorphism (Run-Time)",
        subtitle: "One interface, multiple implementations",
        body: SlideBody::Theory(TheoryContent {
            paragraphs: &[
                "Three monsters, one command: Sing(). Each answers differently. \
                 The decision is made at runtime, while the program is running.",
            ],
            bullets: &[
                "virtual - the parent grants permission: \"you may change this\"",
                "override - the child changes the rule: \"I do it my way!\"",
            ],
            code: Some("public override void Sing() {\n  Console.WriteLine(\"Hiss!\");\n}"),
            tip: None,
        }),
    },
    // Module 6: The Sword
    SlideRecord {
        id: 11,
        kind: SlideKind::Visual,
        title: "The Sword Dilemma",
        subtitle: "New vs Override",
        body: SlideBody::Visual(slides::hiding::build),
    },
    SlideRecord {
        id: 12,
        kind: SlideKind::Theory,
        title: "Method Hiding (new)",
        subtitle: "The Trap",
        body: SlideBody::Theory(TheoryContent {
            paragraphs: &[
                "Using new instead of override only hides the parent's method - \
                 it does not really replace it.",
            ],
            bullets: &[
                "Override: everyone sees the new method (the sharpened sword).",
                "New: the method is hidden. Viewed as a Monster, the old method runs!",
            ],
            code: None,
            tip: Some(Tip {
                title: "Friendly Advice",
                body: "Avoid new. It usually means the base class design is wrong and \
                       someone forgot to write virtual.",
                kind: TipKind::Warning,
            }),
        }),
    },
    // Module 7: Army
    SlideRecord {
        id: 13,
        kind: SlideKind::Visual,
        title: "The Diverse Army",
        subtitle: "Collections",
        body: SlideBody::Visual(slides::horde::build),
    },
    SlideRecord {
        id: 14,
        kind: SlideKind::Theory,
        title: "Upcasting",
        subtitle: "One list to rule them all",
        body: SlideBody::Theory(TheoryContent {
            paragraphs: &[
                "Derived objects can be stored in a base-typed reference. \
                 That is upcasting.",
                "To the list they are all just Monster. Thanks to virtual/override \
                 they still behave correctly when we call their methods.",
            ],
            bullets: &[],
            code: Some(
                "List<Monster> horde = new List<Monster>();\nhorde.Add(new Zombie()); // Legal!\nhorde.Add(new Vampire()); // Legal!",
            ),
            tip: None,
        }),
    },
    // Module 8: Ghosts
    SlideRecord {
        id: 15,
        kind: SlideKind::Visual,
        title: "The Phantom Blueprint",
        subtitle: "Abstract Classes",
        body: SlideBody::Visual(slides::abstractness::build),
    },
    SlideRecord {
        id: 16,
        kind: SlideKind::Theory,
        title: "Abstract Class",
        subtitle: "The Contract",
        body: SlideBody::Theory(TheoryContent {
            paragraphs: &[
                "An abstract class is an incomplete idea. You cannot new it.",
                "Inherit from an abstract class and you are OBLIGED to implement \
                 its abstract methods!",
            ],
            bullets: &[
                "Serves only as a base class",
                "May have normal methods (with code)",
                "May have abstract methods (no code)",
            ],
            code: Some(
                "abstract class Item {\n  public int Id; // Normal\n  public abstract void Use(); // Contract\n}",
            ),
            tip: None,
        }),
    },
    // Module 9: Overloading
    SlideRecord {
        id: 17,
        kind: SlideKind::Visual,
        title: "The Monster Chef",
        subtitle: "Method Overloading",
        body: SlideBody::Visual(slides::overloading::build),
    },
    SlideRecord {
        id: 18,
        kind: SlideKind::Theory,
        title: "Static Polymorphism (Overloading)",
        subtitle: "The Method Signature",
        body: SlideBody::Theory(TheoryContent {
            paragraphs: &[
                "Same method name, different parameters. This is compile-time \
                 polymorphism.",
                "The compiler knows EXACTLY which method to call by looking at the \
                 argument list. No runtime magic involved.",
            ],
            bullets: &[],
            code: Some(
                "void Cook() { ... }\nvoid Cook(Human h) { ... }\nvoid Cook(Human h, Sauce s) { ... }",
            ),
            tip: Some(Tip {
                title: "Pro Tip",
                body: "Only the types and order of the parameters matter. The return \
                       type does NOT make a method unique!",
                kind: TipKind::Info,
            }),
        }),
    },
    // Module 10: Finale
    SlideRecord {
        id: 19,
        kind: SlideKind::Visual,
        title: "The RPG Inventory",
        subtitle: "Putting it together",
        body: SlideBody::Visual(slides::inventory::build),
    },
    SlideRecord {
        id: 20,
        kind: SlideKind::End,
        title: "Level Complete!",
        subtitle: "You survived the OOP course",
        body: SlideBody::Theory(TheoryContent {
            paragraphs: &[
                "Congratulations! You covered constructors, inheritance (single \
                 only!), polymorphism (virtual vs override vs overloading) and \
                 abstract classes.",
                "What comes next?",
            ],
            bullets: &[
                "Interfaces: pure contracts, no code",
                "Generics: magic lists",
                "Design patterns: how to build a castle, not a hut",
            ],
            code: None,
            tip: None,
        }),
    },
];

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_slides_with_sequential_ids() {
        let all = slides();
        assert_eq!(all.len(), 20);
        for (i, record) in all.iter().enumerate() {
            assert_eq!(record.id as usize, i + 1);
        }
    }

    #[test]
    fn test_visual_theory_interleaving() {
        let all = slides();
        for record in all {
            let expected = if record.id == 20 {
                SlideKind::End
            } else if record.id % 2 == 1 {
                SlideKind::Visual
            } else {
                SlideKind::Theory
            };
            assert_eq!(record.kind, expected, "slide {}", record.id);
        }
    }

    #[test]
    fn test_bodies_match_kind() {
        for record in slides() {
            match record.kind {
                SlideKind::Visual => {
                    assert!(matches!(record.body, SlideBody::Visual(_)), "slide {}", record.id)
                }
                SlideKind::Theory | SlideKind::End => {
                    assert!(matches!(record.body, SlideBody::Theory(_)), "slide {}", record.id)
                }
            }
        }
    }

    #[test]
    fn test_opening_and_closing_records() {
        let all = slides();
        assert_eq!(all[0].subtitle, "Class vs Object");
        assert_eq!(all[0].kind, SlideKind::Visual);
        assert_eq!(all[19].title, "Level Complete!");
        assert_eq!(all[19].kind, SlideKind::End);
    }

    #[test]
    fn test_every_visual_factory_builds() {
        for record in slides() {
            if let SlideBody::Visual(build) = record.body {
                let _view = build();
            }
        }
    }
}
