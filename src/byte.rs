// +-----------------------------------------------------------------------------------------------+
// | Copyright 2016 Sean Kerr                                                                      |
// |                                                                                               |
// | Licensed under the Apache License, Version 2.0 (the "License");                               |
// | you may not use this file except in compliance with the License.                              |
// | You may obtain a copy of the License at                                                       |
// |                                                                                               |
// |  http://www.apache.org/licenses/LICENSE-2.0                                                   |
// |                                                                                               |
// | Unless required by applicable law or agreed to in writing, software                           |
// | distributed under the License is distributed on an "AS IS" BASIS,                             |
// | WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.                      |
// | See the License for the specific language governing permissions and                           |
// | limitations under the License.                                                                |
// +-----------------------------------------------------------------------------------------------+

//! Byte classification.

/// No class.
const N: u8 = 0x00;

/// Token byte (RFC 7230 `tchar`).
const T: u8 = 0x01;

/// Visible 7-bit byte allowed in a request target.
const U: u8 = 0x02;

/// Hex digit.
const H: u8 = 0x04;

/// Header value text: HT, SP, visible 7-bit and obs-text.
const V: u8 = 0x08;

/// Byte classes, indexed by byte.
static CLASSES: [u8; 256] = [
    // NUL      SOH      STX      ETX      EOT      ENQ      ACK      BEL
    N,       N,       N,       N,       N,       N,       N,       N,

    // BS       TAB      LF       VT       FF       CR       SO       SI
    N,       V,       N,       N,       N,       N,       N,       N,

    // DLE      DC1      DC2      DC3      DC4      NAK      SYN      ETB
    N,       N,       N,       N,       N,       N,       N,       N,

    // CAN      EM       SUB      ESC      FS       GS       RS       US
    N,       N,       N,       N,       N,       N,       N,       N,

    // SP       !        "        #        $        %        &        '
    V,       T|U|V,   U|V,     T|U|V,   T|U|V,   T|U|V,   T|U|V,   T|U|V,

    // (        )        *        +        ,        -        .        /
    U|V,     U|V,     T|U|V,   T|U|V,   U|V,     T|U|V,   T|U|V,   U|V,

    // 0        1        2        3        4        5        6        7
    T|U|H|V, T|U|H|V, T|U|H|V, T|U|H|V, T|U|H|V, T|U|H|V, T|U|H|V, T|U|H|V,

    // 8        9        :        ;        <        =        >        ?
    T|U|H|V, T|U|H|V, U|V,     U|V,     U|V,     U|V,     U|V,     U|V,

    // @        A        B        C        D        E        F        G
    U|V,     T|U|H|V, T|U|H|V, T|U|H|V, T|U|H|V, T|U|H|V, T|U|H|V, T|U|V,

    // H        I        J        K        L        M        N        O
    T|U|V,   T|U|V,   T|U|V,   T|U|V,   T|U|V,   T|U|V,   T|U|V,   T|U|V,

    // P        Q        R        S        T        U        V        W
    T|U|V,   T|U|V,   T|U|V,   T|U|V,   T|U|V,   T|U|V,   T|U|V,   T|U|V,

    // X        Y        Z        [        \        ]        ^        _
    T|U|V,   T|U|V,   T|U|V,   U|V,     U|V,     U|V,     T|U|V,   T|U|V,

    // `        a        b        c        d        e        f        g
    T|U|V,   T|U|H|V, T|U|H|V, T|U|H|V, T|U|H|V, T|U|H|V, T|U|H|V, T|U|V,

    // h        i        j        k        l        m        n        o
    T|U|V,   T|U|V,   T|U|V,   T|U|V,   T|U|V,   T|U|V,   T|U|V,   T|U|V,

    // p        q        r        s        t        u        v        w
    T|U|V,   T|U|V,   T|U|V,   T|U|V,   T|U|V,   T|U|V,   T|U|V,   T|U|V,

    // x        y        z        {        |        }        ~        DEL
    T|U|V,   T|U|V,   T|U|V,   U|V,     T|U|V,   U|V,     T|U|V,   N,

    // 128 - 255
    V,       V,       V,       V,       V,       V,       V,       V,
    V,       V,       V,       V,       V,       V,       V,       V,
    V,       V,       V,       V,       V,       V,       V,       V,
    V,       V,       V,       V,       V,       V,       V,       V,
    V,       V,       V,       V,       V,       V,       V,       V,
    V,       V,       V,       V,       V,       V,       V,       V,
    V,       V,       V,       V,       V,       V,       V,       V,
    V,       V,       V,       V,       V,       V,       V,       V,
    V,       V,       V,       V,       V,       V,       V,       V,
    V,       V,       V,       V,       V,       V,       V,       V,
    V,       V,       V,       V,       V,       V,       V,       V,
    V,       V,       V,       V,       V,       V,       V,       V,
    V,       V,       V,       V,       V,       V,       V,       V,
    V,       V,       V,       V,       V,       V,       V,       V,
    V,       V,       V,       V,       V,       V,       V,       V,
    V,       V,       V,       V,       V,       V,       V,       V,
];

/// Indicates that a byte is a HTTP token.
#[inline]
pub fn is_token(byte: u8) -> bool {
    CLASSES[byte as usize] & T == T
}

/// Indicates that a byte is a visible 7-bit byte, `0x21` thru `0x7E`.
#[inline]
pub fn is_visible_7bit(byte: u8) -> bool {
    CLASSES[byte as usize] & U == U
}

/// Indicates that a byte is a hex digit.
#[inline]
pub fn is_hex(byte: u8) -> bool {
    CLASSES[byte as usize] & H == H
}

/// Indicates that a byte is allowed within a header value.
#[inline]
pub fn is_header_text(byte: u8) -> bool {
    CLASSES[byte as usize] & V == V
}

/// Indicates that a byte is linear white space.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// Convert a hex digit to its numeric value.
///
/// Returns `None` when `byte` is not `0-9`, `A-F`, or `a-f`.
#[inline]
pub fn hex_to_byte(byte: u8) -> Option<u8> {
    if !is_hex(byte) {
        None
    } else if byte < 0x3A {
        // digit
        Some(byte - b'0')
    } else if byte < 0x47 {
        // upper-case
        Some(byte - 0x37)
    } else {
        // lower-case
        Some(byte - 0x57)
    }
}
