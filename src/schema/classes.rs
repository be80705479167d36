//! Static definitions of every editable class: one entry per JSON data
//! file, with per-attribute explanations shown next to the widgets.

use super::{AttributeSchema, ClassSchema, ValueType};

pub(super) fn all() -> Vec<ClassSchema> {
    vec![
        clefs(),
        genres(),
        instruments(),
        intervals(),
        midi_instruments(),
        modes(),
        note_lengths(),
        notes(),
        scales(),
    ]
}

fn attr(key: &'static str, value_type: ValueType, description: &'static str) -> AttributeSchema {
    AttributeSchema {
        key,
        description,
        value_type,
    }
}

fn clefs() -> ClassSchema {
    ClassSchema {
        name: "clefs",
        description: "The clefs are used in the MusicXML export.",
        attributes: vec![
            attr(
                "sign",
                ValueType::Text,
                "The MusicXML sign type, which defines the clef's look. \
                 Some possible values are 'G', 'C' and 'F'.",
            ),
            attr(
                "line",
                ValueType::Integer,
                "Defines on which note sheet line (from the bottom) the clef should appear. \
                 E.g., a usual 'G' clef appears on the second line.",
            ),
            attr(
                "octave_change",
                ValueType::Integer,
                "Shows if this clef is an octave changed version of the 'sign' clef. \
                 Is 0, if there is no octave change. E.g., the octave lowered 'G' clef \
                 has an octave_change value of '-1'.",
            ),
        ],
    }
}

fn genres() -> ClassSchema {
    ClassSchema {
        name: "genres",
        description: "As defined here, genres are historically developed traditions of music \
                      playing and composition, just like the western classical music genre \
                      (from baroque to early romanticism).",
        attributes: vec![
            attr(
                "weakConsonantIntervals",
                ValueType::TextList,
                "All intervals of this genre which are regarded as non-dissonant, but at the \
                 same time as not perfectly consonant, too. All values must have a \
                 corresponding name in intervals.json.",
            ),
            attr(
                "strongConsonantIntervals",
                ValueType::TextList,
                "All intervals of this genre which are regarded as perfectly consonant. \
                 All values must have a corresponding name in intervals.json.",
            ),
            attr(
                "weakDissonantIntervals",
                ValueType::TextList,
                "All intervals of this genre which are regarded as non-consonant, but at the \
                 same time as not totally dissonant, too. All values must have a corresponding \
                 name in intervals.json.",
            ),
            attr(
                "strongDissonantIntervals",
                ValueType::TextList,
                "All intervals of this genre which are regarded as totally dissonant, just \
                 like the tritonus in classical western music. All values must have a \
                 corresponding name in intervals.json.",
            ),
            attr(
                "rhythmFile",
                ValueType::Text,
                "If there is a MusicXML file which shows the usual rhythms of this genre, its \
                 file location (starting from the 'data' subfolder) has to be given here. \
                 E.g., if there is a 'westernRhythms.xml' file in the 'data' subfolder for \
                 this instance's genre, the value of this attribute would be \
                 'westernRhythms.xml'. If there is no such rhythm file, the value can be \
                 left empty.",
            ),
            attr(
                "sources",
                ValueType::TextList,
                "The information sources for this instance's data, e.g. a book or a website. \
                 Each element will be shown in an own paragraph.",
            ),
        ],
    }
}

fn instruments() -> ClassSchema {
    ClassSchema {
        name: "instruments",
        description: "All instruments for the scale viewer and the scale finder.",
        attributes: vec![
            attr(
                "stringStartNotes",
                ValueType::StringNoteList,
                "Each note stands for the lowest (first) note which is played on one string \
                 of the instrument. E.g., if the two notes 'B,3' and 'A,2' are given, the \
                 instrument will have two strings, where the lowest playable notes are 'B' \
                 in the 3rd octave as well as 'A' in the 2nd octave. The note names must \
                 have a representative in the note names in notes.json.",
            ),
            attr(
                "stringRangeInCents",
                ValueType::Integer,
                "The range of playable notes on each string of this instrument in cents \
                 (100 cents = one semitone). The minimal value is 0. The division of this \
                 instance's stringRangeInCents by its fretDistanceInCents must result in a \
                 whole number, as this division shows how many frets this instrument has on \
                 each string.",
            ),
            attr(
                "fretDistanceInCents",
                ValueType::Integer,
                "The distance of playable notes on this instrument in cents (100 cents = one \
                 semitone). E.g., a typical fretted western string instrument (such as an \
                 acoustic guitar) has a fret distance of 100. The minimal value is 0, the \
                 maximal value this instance's value of 'stringRangeInCents'. The division \
                 of stringRangeInCents by fretDistanceInCents must result in a whole number.",
            ),
            attr(
                "labels",
                ValueType::LabelGrid,
                "Each line of input fields stands for one string of the instrument, in the \
                 same order as the strings in this instance's stringStartNotes. Each row \
                 stands for one note of this string. Keep in mind that you have to adjust \
                 the number of lines and rows after the number of strings in \
                 'stringStartNotes' and/or the value of 'stringRangeInCents' and/or \
                 'fretDistanceInCents' is changed.",
            ),
        ],
    }
}

fn intervals() -> ClassSchema {
    ClassSchema {
        name: "intervals",
        description: "The interval definitions are used for the genres definitions.",
        attributes: vec![attr(
            "cents",
            ValueType::Integer,
            "The interval value in cents (100 cents = one semitone, and 200 cents = one \
             whole tone). E.g., a minor second has a cent value of 100 cents, and a major \
             second a value of 200 cents. The value cannot be negative.",
        )],
    }
}

fn midi_instruments() -> ClassSchema {
    ClassSchema {
        name: "midi_instruments",
        description: "The instances represent the instruments of the MIDI standard. This \
                      standard is used by MusicXML playback programs, such as usual \
                      scorewriters.",
        attributes: vec![attr(
            "midiNumber",
            ValueType::Integer,
            "The number by which this instrument can be found according to the MIDI standard.",
        )],
    }
}

fn modes() -> ClassSchema {
    ClassSchema {
        name: "modes",
        description: "The mode definitions are used for the MusicXML export. Each mode stands \
                      for how many sharps or flats should be shown right after the clef.",
        attributes: vec![attr(
            "numberSharps",
            ValueType::Integer,
            "Shows by how many sharps or flats after the clef this mode is represented. The \
             value is 0, if there should be no flats or sharps. The value is positive, if \
             the mode is represented with sharps, and negative, if it is represented by \
             flats. E.g., the 'G major' mode has the value '1' (for 1 sharp), whereas the \
             mode 'F major' has the value '-1' (for one flat).",
        )],
    }
}

fn note_lengths() -> ClassSchema {
    ClassSchema {
        name: "note_lengths",
        description: "The note lengths are used in the MusicXML export, as well as in the \
                      fractions calculator.",
        attributes: vec![
            attr(
                "divisions",
                ValueType::Integer,
                "Shows how many times longer than a 64th note this note length is. E.g., a \
                 '16th' note length is 4 times longer than a 64th note. The minimal value \
                 is 1.",
            ),
            attr(
                "musicXMLType",
                ValueType::Text,
                "The representation of this note in the MusicXML standard (used in the \
                 MusicXML export of audio recordings and scale/chord samples). Consult the \
                 MusicXML standard documentation to find out the correct one.",
            ),
            attr(
                "musicXMLAddition",
                ValueType::Text,
                "Is empty, if the length should not be represented with a dot (such as a \
                 quarter note). Is 'dot', if the length should be represented as a dotted \
                 note (such as the dotted quarter note). This addition is used in the \
                 MusicXML export.",
            ),
            attr(
                "calculatorSymbol",
                ValueType::Text,
                "The text that shall be shown in the fractions calculator for this note \
                 length. E.g., quarter notes have the text '1/4'.",
            ),
        ],
    }
}

fn notes() -> ClassSchema {
    ClassSchema {
        name: "notes",
        description: "All notes (in the sense of the pitch of a tone) which are used e.g. for \
                      the instrument, keynote and MusicXML export functions. Non-western \
                      standard notes (translated into a well-tempered system) are usable, \
                      too. Currently, '#2' stands for a half-sharp and 'b2' for a half-flat.",
        attributes: vec![
            attr(
                "centsToC",
                ValueType::Integer,
                "The distance (in cents: 100 cents = one semitone) of this note to the next \
                 lower 'C'. E.g., the note 'C#' has a distance of 100 cents (one semitone), \
                 whereas 'B' has a distance of 1100 (eleven semitones). The distance cannot \
                 be negative. The maximal value is 1200 (12 semitones, one octave).",
            ),
            attr(
                "musicXMLStep",
                ValueType::Text,
                "The whole tone (according to the MusicXML standard) by which this note is \
                 called. E.g., the musicXMLStep of a C-flat note instance would be 'C'. \
                 Possible values are 'A', 'B', 'C', 'D', 'E', 'F' and 'G'.",
            ),
            attr(
                "musicXMLAlter",
                ValueType::Text,
                "The distance (in semitones: 1.0 is one semitone, 2.0 a whole tone) of the \
                 note to the note to which it is called after. E.g., the note 'C' has the \
                 distance 0.0 to 'C', whereas 'C#' has the distance 1.0, and 'Cb' the \
                 distance -1.0.",
            ),
            attr(
                "musicXMLAccidental",
                ValueType::Text,
                "The accidental symbol (according to the MusicXML standard) that should be \
                 shown by a scorewriter together with this note. Some possible values are \
                 'sharp', 'flat', 'quarter-sharp' and 'slash-flat'.",
            ),
        ],
    }
}

fn scales() -> ClassSchema {
    ClassSchema {
        name: "scales",
        description: "All scales that can be shown e.g. on the piano, the other instruments, \
                      in the MusicXML samples and in the scale finder.",
        attributes: vec![
            attr(
                "notesInCentsToKeynote",
                ValueType::IntegerList,
                "Each element stands for one note of the scale. E.g., if there are 8 \
                 elements, the scale will be octatonic. Each numeric value of an element \
                 stands for the distance (in cents: 100 cents = one semitone) of the \
                 represented note to the next lower keynote of the scale. E.g., in a C \
                 major scale, the distance of the note 'D' is 200 cents to the next lower \
                 keynote (the C). Therefore, in a major scale, the first numeric element \
                 has the value '200'.",
            ),
            attr(
                "info",
                ValueType::TextList,
                "Some information about this scale (the sources should be written as \
                 elements of this instance's 'sources' attribute). Each element will be \
                 shown in an own paragraph.",
            ),
            attr(
                "sources",
                ValueType::TextList,
                "One or more references (e.g. a book or a website) for the scale data. Each \
                 element will be shown in an own paragraph.",
            ),
        ],
    }
}
