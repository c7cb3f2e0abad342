//! Property: the final session state does not depend on the order in which
//! a rejection and a superseding authoritative push arrive — the first
//! message to resolve the pending move wins, and the other is discarded as
//! a stray.

use lanchess_client::shared::{BoardSnapshot, Fen, Move, ServerMessage, Side, Square};
use lanchess_client::{Rules, SessionClient, SessionConfig, StandardRules};
use proptest::prelude::*;

fn sq(text: &str) -> Square {
    text.parse().unwrap()
}

fn client_with_pending_e4() -> SessionClient {
    let mut client = SessionClient::new("alice", SessionConfig::default());
    client.take_outgoing();
    client.propose_move(sq("e2"), sq("e4")).unwrap();
    client.take_events();
    client
}

/// Opening moves the "server" may have resolved instead of e2e4.
const SERVER_MOVES: &[(&str, &str)] = &[
    ("d2", "d4"),
    ("g1", "f3"),
    ("c2", "c4"),
    ("b1", "c3"),
];

proptest! {
    #[test]
    fn final_state_is_independent_of_resolver_order(
        rejection_first in any::<bool>(),
        server_move_index in 0..SERVER_MOVES.len(),
        reason in "[a-zA-Z ]{1,24}",
    ) {
        let (from, to) = SERVER_MOVES[server_move_index];
        let mv = Move {
            from: sq(from),
            to: sq(to),
            promotion: None,
        };
        let (server_fen, server_turn) = StandardRules
            .apply_move(&Fen::starting(), &mv)
            .unwrap();

        let rejection = ServerMessage::InvalidMove { error: reason };
        let push = ServerMessage::BoardUpdate(BoardSnapshot {
            fen: server_fen.clone(),
            turn: Some(server_turn),
            status: None,
            winner: None,
            analytics: None,
        });

        let mut client = client_with_pending_e4();
        if rejection_first {
            client.receive(rejection);
            client.receive(push);
        } else {
            client.receive(push);
            client.receive(rejection);
        }

        // Either way the pending move is gone and the server's snapshot is
        // the ground truth.
        prop_assert!(client.pending_move().is_none());
        prop_assert_eq!(client.state().position.as_str(), server_fen.as_str());
        prop_assert_eq!(client.state().turn, Side::Black);
    }
}
