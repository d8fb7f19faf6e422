//! Train artwork
//!
//! A D51 steam locomotive, its coal tender, six wheel-rotation frames and
//! the carriage template. All parts are ten rows tall once the body and a
//! wheel frame are stacked.

/// Locomotive body (without wheels)
pub const BODY: &[&str] = &[
    r"      ====        ________                ___________ ",
    r"  _D _|  |_______/        \__I_I_____===__|_________| ",
    r"   |(_)---  |   H\________/ |   |        =|___ ___|   ",
    r"   /     |  |   H  |  |     |   |         ||_| |_||   ",
    r"  |      |  |   H  |__--------------------| [___] |   ",
    r"  | ________|___H__/__|_____/[][]~\_______|       |   ",
    r"  |/ |   |-----------I_____I [][] []  D   |=======|__ ",
];

/// Coal tender, drawn alongside the body from its top row
pub const COAL: &[&str] = &[
    r"                              ",
    r"                              ",
    r"    _________________         ",
    r"   _|                \_____A  ",
    r" =|                        |  ",
    r" -|                        |  ",
    r"__|________________________|_ ",
    r"|__________________________|_ ",
    r"   |_D__D__D_|  |_D__D__D_|   ",
    r"    \_/   \_/    \_/   \_/    ",
];

/// Wheel-rotation frames, drawn directly below the body
pub mod wheels {
    pub const FRAME_1: &[&str] = &[
        r"__/ =| o |=-~~\  /~~\  /~~\  /~~\ ____Y___________|__ ",
        r" |/-=|___|=    ||    ||    ||    |_____/~\___/        ",
        r"  \_/      \O=====O=====O=====O_/      \_/            ",
    ];

    pub const FRAME_2: &[&str] = &[
        r"__/ =| o |=-~~\  /~~\  /~~\  /~~\ ____Y___________|__ ",
        r" |/-=|___|=O=====O=====O=====O   |_____/~\___/        ",
        r"  \_/      \__/  \__/  \__/  \__/      \_/            ",
    ];

    pub const FRAME_3: &[&str] = &[
        r"__/ =| o |=-O=====O=====O=====O \ ____Y___________|__ ",
        r" |/-=|___|=    ||    ||    ||    |_____/~\___/        ",
        r"  \_/      \__/  \__/  \__/  \__/      \_/            ",
    ];

    pub const FRAME_4: &[&str] = &[
        r"__/ =| o |=-~O=====O=====O=====O\ ____Y___________|__ ",
        r" |/-=|___|=    ||    ||    ||    |_____/~\___/        ",
        r"  \_/      \__/  \__/  \__/  \__/      \_/            ",
    ];

    pub const FRAME_5: &[&str] = &[
        r"__/ =| o |=-~~\  /~~\  /~~\  /~~\ ____Y___________|__ ",
        r" |/-=|___|=   O=====O=====O=====O|_____/~\___/        ",
        r"  \_/      \__/  \__/  \__/  \__/      \_/            ",
    ];

    pub const FRAME_6: &[&str] = &[
        r"__/ =| o |=-~~\  /~~\  /~~\  /~~\ ____Y___________|__ ",
        r" |/-=|___|=    ||    ||    ||    |_____/~\___/        ",
        r"  \_/      \_O=====O=====O=====O/      \_/            ",
    ];
}

/// Carriage template
///
/// `{hash}`, `{msg}` and `{modifications}` are replaced by 40-column values,
/// which makes every filled line 46 columns wide.
pub const CARRIAGE: &[&str] = &[
    r"                                              ",
    r"  __________________________________________  ",
    r" /                                          \ ",
    r" | {hash} | ",
    r" | {msg} | ",
    r" | {modifications} | ",
    r" |__________________________________________| ",
    r"_|__________________________________________|_",
    r"   |_D__D_|                      |_D__D_|     ",
    r"    \_/\_/                        \_/\_/      ",
];
