// Copyright (C) 2022-present The NetGauze Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Constructing an RFC9003 Shutdown Communication and moving it to and from
//! its wire format.

use bgp_shutcomm_parse_utils::{ReadablePdu, Span, WritablePdu};
use bgp_shutcomm_pkt::{ShutdownCommunication, ShutdownNotification};
use std::io::Cursor;

pub fn main() {
    // Construct a new Cease NOTIFICATION with an Administrative Shutdown communication
    let msg = ShutdownNotification::new(
        2,
        ShutdownCommunication::new("[TICKET-1] maintenance window"),
    );

    // Serialize the message into it's BGP binary format
    let mut buf: Vec<u8> = vec![];
    let mut cursor = Cursor::new(&mut buf);
    msg.write(&mut cursor).unwrap();
    assert_eq!(buf.len(), msg.len());
    assert_eq!(&buf[16..22], &[0, 51, 3, 6, 2, 29]);

    // Deserialize the message from binary format
    let (_, msg_back) = ShutdownNotification::from_wire(Span::new(&buf)).unwrap();
    assert_eq!(msg, msg_back);
    println!("{}: {}", msg_back.sub_code_label(), msg_back.message());
}
