use crate::game::*;
use crate::player::*;
use crate::rules::ruleset::*;
use std::sync::mpsc;

fn regular_moves(str_cards: &str) -> Vec<VMove> {
    unwrap!(parse_cards(str_cards)).into_iter()
        .map(VMove::regular)
        .collect()
}

fn talon(str_cards: &str, esuit_trump: ESuit) -> STalon {
    STalon::new(unwrap!(parse_cards(str_cards)), esuit_trump)
}

fn first_game_state(gamestate: &SGameState) -> &SGameState {
    unwrap!(std::iter::successors(Some(gamestate), |gamestate| gamestate.previous()).last())
}

struct SBotTest {
    fn_choose: fn(&[VMove]) -> Option<VMove>,
    vectrumpexchange_notified: Vec<STrumpExchange>,
    ob_won: Option<bool>,
}

impl SBotTest {
    fn new(fn_choose: fn(&[VMove]) -> Option<VMove>) -> Self {
        SBotTest {
            fn_choose,
            vectrumpexchange_notified: Vec::new(),
            ob_won: None,
        }
    }
}

impl TBot for SBotTest {
    fn ask_for_move(&mut self, _playerperspective: &dyn TPlayerPerspective, slcmv: &[VMove], txmv: mpsc::Sender<VMove>) {
        if let Some(mv) = (self.fn_choose)(slcmv) {
            unwrap!(txmv.send(mv));
        }
    }
    fn name(&self) -> &str {
        "test"
    }
    fn notify_trump_exchange(&mut self, trumpexchange: STrumpExchange) {
        self.vectrumpexchange_notified.push(trumpexchange);
    }
    fn notify_game_end(&mut self, b_won: bool, _gamestate: &SGameState) {
        assert!(self.ob_won.is_none());
        self.ob_won = Some(b_won);
    }
}

fn prefer_trump_exchange(slcmv: &[VMove]) -> Option<VMove> {
    slcmv.iter().find(|mv| mv.is_trump_exchange()).or_else(|| slcmv.first()).copied()
}

#[test]
fn test_leader_valid_moves() {
    let engine = SSchnapsenGamePlayEngine::new();
    let leadergamestate = SLeaderGameState::new(game_state_for_test(), &engine);
    assert!(leadergamestate.am_i_leader());
    assert_eq!(leadergamestate.valid_moves(), regular_moves("CA C5 H9 C7"));
    assert_eq!(leadergamestate.get_hand().get_cards(), unwrap!(parse_cards("CA C5 H9 C7")).as_slice());
    assert_eq!(leadergamestate.my_score(), SScore::new(4, 2));
    assert_eq!(leadergamestate.opponent_score(), SScore::new(2, 4));
    assert_eq!(leadergamestate.won_cards(), &[ECard::DA]);
    assert_eq!(leadergamestate.opponent_won_cards(), &[ECard::D9]);
    assert_eq!(leadergamestate.trump_suit(), ESuit::Hearts);
    assert_eq!(leadergamestate.trump_card(), Some(ECard::HA));
    assert_eq!(leadergamestate.talon_size(), 2);
    assert!(leadergamestate.partial_trick().is_none());
    assert!(leadergamestate.previous_tricks().is_empty());
    assert!(leadergamestate.play(VMove::regular(ECard::SA)).is_err());
}

#[test]
fn test_follower_valid_moves() {
    let engine = SSchnapsenGamePlayEngine::new();
    let followergamestate = unwrap!(SLeaderGameState::new(game_state_for_test(), &engine).play(VMove::regular(ECard::CA)));
    assert!(!followergamestate.am_i_leader());
    assert_eq!(unwrap!(followergamestate.partial_trick()).card_led(), ECard::CA);
    // talon still open
    assert_eq!(followergamestate.valid_moves(), regular_moves("SA H5 C9 S7"));
    assert_eq!(followergamestate.get_hand().get_cards(), unwrap!(parse_cards("SA H5 C9 S7")).as_slice());
    assert_eq!(followergamestate.opponent().hand.get_cards(), unwrap!(parse_cards("C5 H9 C7")).as_slice());
    assert!(followergamestate.play(VMove::regular(ECard::CA)).is_err());
    assert!(followergamestate.play(VMove::from(SMarriage::new_for_suit(ESuit::Spades))).is_err());

    let gamestate = unwrap!(followergamestate.play(VMove::regular(ECard::H5)));
    // H5 trumps CA
    assert_eq!(gamestate.leader.epi, EPlayerIndex::EPI1);
    assert_eq!(gamestate.leader.score, SScore::new_direct(2+4+11));
    assert_eq!(gamestate.leader.hand.get_cards(), unwrap!(parse_cards("SA C9 S7 SK")).as_slice());
    assert_eq!(gamestate.follower.score, SScore::new(4, 2));
    assert_eq!(gamestate.follower.hand.get_cards(), unwrap!(parse_cards("C5 H9 C7 HA")).as_slice());
    assert!(gamestate.talon.is_empty());
    let previous = unwrap!(gamestate.oprevious.as_ref());
    assert!(!previous.b_leader_remained_leader);
    assert_eq!(previous.trick.cards(), [ECard::CA, ECard::H5]);
    assert_eq!(*previous.gamestate, game_state_for_test());
}

fn observable_cards(playerperspective: &dyn TPlayerPerspective) -> Vec<ECard> {
    let mut veccard = playerperspective.get_hand().get_cards().to_vec();
    veccard.extend(playerperspective.won_cards());
    veccard.extend(playerperspective.opponent_won_cards());
    veccard.extend(playerperspective.trump_card());
    veccard.extend(playerperspective.partial_trick().map(|partialtrick| partialtrick.card_led()));
    for trick in playerperspective.previous_tricks() {
        veccard.extend(trick.cards());
    }
    veccard
}

#[test]
fn test_perspective_hides_opponent_hand_and_talon() {
    let engine = SSchnapsenGamePlayEngine::new();
    let leadergamestate = SLeaderGameState::new(game_state_for_test(), &engine);
    let veccard_hidden_from_leader = unwrap!(parse_cards("SA H5 C9 S7 SK"));
    let veccard_seen = observable_cards(&leadergamestate);
    assert_eq!(veccard_seen, unwrap!(parse_cards("CA C5 H9 C7 DA D9 HA")));
    assert!(veccard_hidden_from_leader.iter().all(|card| !veccard_seen.contains(card)));
    assert_eq!(leadergamestate.talon_size(), 2);

    let followergamestate = unwrap!(leadergamestate.play(VMove::regular(ECard::CA)));
    let veccard_seen = observable_cards(&followergamestate);
    assert_eq!(veccard_seen, unwrap!(parse_cards("SA H5 C9 S7 D9 DA HA CA")));
    for card in unwrap!(parse_cards("C5 H9 C7 SK")) {
        assert!(!veccard_seen.contains(&card), "{} visible to follower", card);
    }
}

#[test]
fn test_trick_shares_start_snapshot() {
    let engine = SSchnapsenGamePlayEngine::new();
    let rcgamestate = std::rc::Rc::new(game_state_for_test());
    let leadergamestate = SLeaderGameState::new_shared(rcgamestate.clone(), &engine);
    assert!(std::ptr::eq(leadergamestate.gamestate(), rcgamestate.as_ref()));
    let gamestate = unwrap!(unwrap!(leadergamestate.play(VMove::regular(ECard::C5))).play(VMove::regular(ECard::C9)));
    assert!(std::rc::Rc::ptr_eq(&unwrap!(gamestate.oprevious.as_ref()).gamestate, &rcgamestate));
    assert_eq!(*rcgamestate, game_state_for_test());
}

#[test]
fn test_trump_exchange() {
    let engine = SSchnapsenGamePlayEngine::new();
    let gamestate = SGameState::new(
        bot_state_for_test(EPlayerIndex::EPI0, "SJ HA", SScore::default(), ""),
        bot_state_for_test(EPlayerIndex::EPI1, "HT CA", SScore::default(), ""),
        talon("D9 ST", ESuit::Spades),
        /*oprevious*/None,
    );
    let trumpexchange = unwrap!(STrumpExchange::new(ECard::SJ));
    let leadergamestate = SLeaderGameState::new(gamestate, &engine);
    assert!(leadergamestate.valid_moves().contains(&VMove::from(trumpexchange)));
    assert!(leadergamestate.play(VMove::from(trumpexchange)).is_err());
    assert!(leadergamestate.exchange_trump(unwrap!(STrumpExchange::new(ECard::HJ))).is_err());
    let leadergamestate = unwrap!(leadergamestate.exchange_trump(trumpexchange));
    assert_eq!(leadergamestate.trump_exchange(), Some(trumpexchange));
    assert_eq!(leadergamestate.get_hand().get_cards(), &[ECard::HA, ECard::ST]);
    assert_eq!(leadergamestate.gamestate().talon.get_cards(), &[ECard::D9, ECard::SJ]);
    assert_eq!(leadergamestate.valid_moves(), regular_moves("HA ST"));
    let followergamestate = unwrap!(leadergamestate.play(VMove::regular(ECard::ST)));
    assert_eq!(unwrap!(followergamestate.partial_trick()).trump_exchange(), Some(trumpexchange));
}

#[test]
fn test_marriage_points_pending_until_trick_won() {
    let engine = SSchnapsenGamePlayEngine::new();
    let gamestate = SGameState::new(
        bot_state_for_test(EPlayerIndex::EPI0, "HQ HK C9", SScore::default(), ""),
        bot_state_for_test(EPlayerIndex::EPI1, "HA CT D2", SScore::default(), ""),
        talon("DJ SJ", ESuit::Spades),
        /*oprevious*/None,
    );
    let marriage = VMove::from(SMarriage::new_for_suit(ESuit::Hearts));
    let leadergamestate = SLeaderGameState::new(gamestate, &engine);
    assert_eq!(leadergamestate.valid_moves(), {
        let mut vecmv = regular_moves("HQ HK C9");
        vecmv.push(marriage);
        vecmv
    });
    let followergamestate = unwrap!(leadergamestate.play(marriage));
    assert_eq!(followergamestate.opponent_score(), SScore::new_pending(20));
    assert_eq!(followergamestate.opponent().hand.get_cards(), &[ECard::HK, ECard::C9]);

    // leader loses the marriage trick
    let gamestate = unwrap!(followergamestate.play(VMove::regular(ECard::HA)));
    assert_eq!(gamestate.leader.epi, EPlayerIndex::EPI1);
    assert_eq!(gamestate.leader.score, SScore::new_direct(14));
    assert_eq!(gamestate.follower.score, SScore::new_pending(20));
    assert_eq!(gamestate.leader.hand.get_cards(), &[ECard::CT, ECard::D2, ECard::DJ]);
    assert_eq!(gamestate.follower.hand.get_cards(), &[ECard::HK, ECard::C9, ECard::SJ]);
    assert!(gamestate.talon.is_empty());

    // talon closed: EPI0 has no diamond, so must trump
    let followergamestate = unwrap!(SLeaderGameState::new(gamestate, &engine).play(VMove::regular(ECard::D2)));
    assert_eq!(followergamestate.valid_moves(), regular_moves("SJ"));
    let gamestate = unwrap!(followergamestate.play(VMove::regular(ECard::SJ)));
    assert_eq!(gamestate.leader.epi, EPlayerIndex::EPI0);
    assert_eq!(gamestate.leader.score, SScore::new_direct(22));
    assert_eq!(gamestate.follower.score, SScore::new_direct(14));
    assert_eq!(
        gamestate.previous_tricks().map(STrick::cards).collect::<Vec<_>>(),
        vec![[ECard::D2, ECard::SJ], [ECard::HQ, ECard::HA]],
    );
    assert_eq!(engine.declare_winner(&gamestate), None);
}

#[test]
fn test_marriage_in_trump() {
    let engine = SSchnapsenGamePlayEngine::new();
    let gamestate = SGameState::new(
        bot_state_for_test(EPlayerIndex::EPI0, "SQ SK", SScore::default(), ""),
        bot_state_for_test(EPlayerIndex::EPI1, "C9 CT", SScore::default(), ""),
        talon("DJ HJ", ESuit::Spades),
        /*oprevious*/None,
    );
    let followergamestate = unwrap!(SLeaderGameState::new(gamestate, &engine).play(VMove::from(SMarriage::new_for_suit(ESuit::Spades))));
    let gamestate = unwrap!(followergamestate.play(VMove::regular(ECard::CT)));
    assert_eq!(gamestate.leader.epi, EPlayerIndex::EPI0);
    assert_eq!(gamestate.leader.score, SScore::new_direct(3+10+40));
}

#[test]
fn test_declare_winner() {
    let engine = SSchnapsenGamePlayEngine::new();
    let gamestate_with_scores = |n_points_leader, n_points_follower, str_hand| SGameState::new(
        bot_state_for_test(EPlayerIndex::EPI1, str_hand, SScore::new_direct(n_points_leader), ""),
        bot_state_for_test(EPlayerIndex::EPI0, str_hand, SScore::new(n_points_follower, 20), ""),
        talon("", ESuit::Clubs),
        /*oprevious*/None,
    );
    assert_eq!(engine.declare_winner(&gamestate_with_scores(65, 40, "CA")), None);
    assert_eq!(engine.declare_winner(&gamestate_with_scores(66, 0, "CA")), Some((EPlayerIndex::EPI1, 3)));
    assert_eq!(engine.declare_winner(&gamestate_with_scores(70, 32, "CA")), Some((EPlayerIndex::EPI1, 2)));
    assert_eq!(engine.declare_winner(&gamestate_with_scores(70, 33, "CA")), Some((EPlayerIndex::EPI1, 1)));
    // pending points do not count
    assert_eq!(engine.declare_winner(&gamestate_with_scores(20, 50, "CA")), None);
    assert_eq!(engine.declare_winner(&gamestate_with_scores(20, 70, "CA")), Some((EPlayerIndex::EPI0, 2)));
    // all cards played: last trick winner wins
    assert_eq!(engine.declare_winner(&gamestate_with_scores(50, 40, "")), Some((EPlayerIndex::EPI1, 1)));
}

#[test]
fn test_deal() {
    let mapepistr_bot_id = EPlayerIndex::map_from_fn(|epi| epi.to_string());
    let engine = SSchnapsenGamePlayEngine::new();
    let gamestate = unwrap!(engine.deal(/*n_seed*/3, EPlayerIndex::EPI1, &mapepistr_bot_id));
    assert_eq!(gamestate.leader.epi, EPlayerIndex::EPI1);
    assert_eq!(gamestate.follower.epi, EPlayerIndex::EPI0);
    assert_eq!(gamestate.leader.hand.len(), 5);
    assert_eq!(gamestate.follower.hand.len(), 5);
    assert_eq!(gamestate.talon.len(), 10);
    assert_eq!(gamestate.talon.trump_suit(), unwrap!(gamestate.talon.trump_card()).suit());
    let mut veccard_all : Vec<ECard> = gamestate.leader.hand.get_cards().iter()
        .chain(gamestate.follower.hand.get_cards())
        .chain(gamestate.talon.get_cards())
        .copied()
        .collect();
    veccard_all.sort_by_key(|card| card.to_usize());
    let mut veccard_deck : Vec<ECard> = ECard::schnapsen_values().collect();
    veccard_deck.sort_by_key(|card| card.to_usize());
    assert_eq!(veccard_all, veccard_deck);
    assert_eq!(unwrap!(engine.deal(/*n_seed*/3, EPlayerIndex::EPI1, &mapepistr_bot_id)), gamestate);

    let engine = SSchnapsenGamePlayEngine::new_with_ruleset(unwrap!(SRuleSet::from_string("hand-size = 3")));
    let gamestate = unwrap!(engine.deal(/*n_seed*/3, EPlayerIndex::EPI0, &mapepistr_bot_id));
    assert_eq!(gamestate.leader.hand.len(), 3);
    assert_eq!(gamestate.leader.hand.max_size(), 3);
    assert_eq!(gamestate.talon.len(), 14);
}

#[test]
fn test_full_game_terminates() {
    let engine = SSchnapsenGamePlayEngine::new();
    for n_seed in 0..30 {
        let mut botrandom = SBotRandom::new(n_seed);
        let mut botfirst = SBotFirstMove::default();
        let gameresult = unwrap!(engine.play_game(&mut botrandom, &mut botfirst, n_seed));
        assert!(gameresult.oforfeit.is_none());
        assert!((1..=3).contains(&gameresult.n_game_points));
        let gamestate = &gameresult.gamestate;
        let botstate_winner = gamestate.bot_state(gameresult.epi_winner);
        assert_eq!(gameresult.str_winner_id, botstate_winner.str_bot_id);
        assert!(66<=botstate_winner.score.n_direct_points || gamestate.all_cards_played());
        assert_eq!(
            [&gamestate.leader, &gamestate.follower].iter()
                .map(|botstate| botstate.hand.len() + botstate.veccard_won.len())
                .sum::<usize>() + gamestate.talon.len(),
            20,
        );
        assert_eq!(
            2 * gamestate.previous_tricks().count(),
            gamestate.leader.veccard_won.len() + gamestate.follower.veccard_won.len(),
        );
        assert_eq!(first_game_state(gamestate).leader.epi, EPlayerIndex::EPI0);
        assert_eq!(first_game_state(gamestate).leader.str_bot_id, "random (0)");
        // same seeds, same game
        let gameresult_again = unwrap!(engine.play_game(&mut SBotRandom::new(n_seed), &mut SBotFirstMove::default(), n_seed));
        assert_eq!(gameresult_again.summary(), gameresult.summary());
    }
}

#[test]
fn test_trump_exchange_notifies_follower() {
    let engine = SSchnapsenGamePlayEngine::new();
    let gamestate = SGameState::new(
        bot_state_for_test(EPlayerIndex::EPI0, "SJ HA", SScore::default(), ""),
        bot_state_for_test(EPlayerIndex::EPI1, "HT CA", SScore::default(), ""),
        talon("D9 ST", ESuit::Spades),
        /*oprevious*/None,
    );
    let mut abot = EPlayerIndex::map_from_fn(|_epi| SBotTest::new(prefer_trump_exchange));
    let gameresult = unwrap!(engine.play_game_from(&mut abot, gamestate));
    // HA/HT, ST/SJ, D9/CA
    assert_eq!(gameresult.epi_winner, EPlayerIndex::EPI0);
    assert_eq!(gameresult.n_game_points, 3);
    assert!(gameresult.oforfeit.is_none());
    assert_eq!(gameresult.gamestate.leader.score, SScore::new_direct(44));
    assert_eq!(gameresult.gamestate.previous_tricks().count(), 3);
    let trick_first = unwrap!(gameresult.gamestate.previous_tricks().last());
    assert_eq!(trick_first.partialtrick.trump_exchange(), Some(unwrap!(STrumpExchange::new(ECard::SJ))));
    assert_eq!(abot[EPlayerIndex::EPI1].vectrumpexchange_notified, vec![unwrap!(STrumpExchange::new(ECard::SJ))]);
    assert!(abot[EPlayerIndex::EPI0].vectrumpexchange_notified.is_empty());
    assert_eq!(abot[EPlayerIndex::EPI0].ob_won, Some(true));
    assert_eq!(abot[EPlayerIndex::EPI1].ob_won, Some(false));
}

#[test]
fn test_forfeit() {
    let engine = SSchnapsenGamePlayEngine::new();
    for (fn_choose, omv_expected) in [
        (
            (|_slcmv: &[VMove]| Some(VMove::regular(ECard::C2))) as fn(&[VMove]) -> Option<VMove>,
            Some(VMove::regular(ECard::C2)),
        ),
        ((|_slcmv: &[VMove]| None) as fn(&[VMove]) -> Option<VMove>, None),
    ] {
        let mut abot = EPlayerIndex::map_from_raw([
            SBotTest::new(fn_choose),
            SBotTest::new(|slcmv| slcmv.first().copied()),
        ]);
        let gameresult = unwrap!(engine.play_game_seated(&mut abot, EPlayerIndex::EPI0, /*n_seed*/5));
        assert_eq!(gameresult.oforfeit, Some(SForfeit{epi: EPlayerIndex::EPI0, omv: omv_expected}));
        assert_eq!(gameresult.epi_winner, EPlayerIndex::EPI1);
        assert_eq!(gameresult.n_game_points, 3);
        assert_eq!(gameresult.gamestate.previous_tricks().count(), 0);
        assert_eq!(abot[EPlayerIndex::EPI1].ob_won, Some(true));
        assert!(gameresult.summary().forfeit.is_some());
    }
    // follower forfeits after the first lead
    let mut abot = EPlayerIndex::map_from_raw([
        SBotTest::new(|slcmv| slcmv.first().copied()),
        SBotTest::new(|_slcmv| None),
    ]);
    let gameresult = unwrap!(engine.play_game_seated(&mut abot, EPlayerIndex::EPI0, /*n_seed*/5));
    assert_eq!(gameresult.oforfeit, Some(SForfeit{epi: EPlayerIndex::EPI1, omv: None}));
    assert_eq!(gameresult.epi_winner, EPlayerIndex::EPI0);
}

#[test]
fn test_run_match() {
    let engine = SSchnapsenGamePlayEngine::new();
    let mut abot : EnumMap<EPlayerIndex, Box<dyn TBot>> = EPlayerIndex::map_from_raw([
        Box::new(SBotRandom::new(1)) as Box<dyn TBot>,
        Box::new(SBotFirstMove::default()) as Box<dyn TBot>,
    ]);
    let mut n_games_reported = 0;
    let matchresult = unwrap!(run_match(&engine, &mut abot, /*n_seed*/11, |_gameresult, _an_game_points| {
        n_games_reported += 1;
    }));
    assert_eq!(n_games_reported, matchresult.vecgameresult.len());
    let n_game_points_match = engine.ruleset.n_game_points_match;
    assert!(n_game_points_match <= matchresult.an_game_points[matchresult.epi_winner]);
    assert!(matchresult.an_game_points[matchresult.epi_winner.opponent()] < n_game_points_match);
    for epi in EPlayerIndex::values() {
        assert_eq!(
            matchresult.an_game_points[epi],
            matchresult.vecgameresult.iter()
                .filter(|gameresult| gameresult.epi_winner==epi)
                .map(|gameresult| gameresult.n_game_points)
                .sum::<isize>(),
        );
    }
    for (i_game, gameresult) in matchresult.vecgameresult.iter().enumerate() {
        assert_eq!(
            first_game_state(&gameresult.gamestate).leader.epi,
            if 0==i_game%2 {EPlayerIndex::EPI0} else {EPlayerIndex::EPI1},
        );
    }
}

#[test]
fn test_game_summary_json() {
    let engine = SSchnapsenGamePlayEngine::new();
    let gameresult = unwrap!(engine.play_game(&mut SBotFirstMove::default(), &mut SBotFirstMove::default(), /*n_seed*/2));
    let summary = gameresult.summary();
    assert_eq!(summary.winner, gameresult.str_winner_id);
    assert_eq!(summary.scores.iter().map(|(str_bot_id, _score)| str_bot_id.as_str()).collect::<Vec<_>>(), vec!["first (0)", "first (1)"]);
    let jsonval = unwrap!(serde_json::to_value(&summary));
    assert_eq!(jsonval["winner"], serde_json::json!(gameresult.str_winner_id));
    assert_eq!(jsonval["game_points"], serde_json::json!(gameresult.n_game_points));
    assert!(jsonval["forfeit"].is_null());
    assert!(jsonval["scores"][0][1]["n_direct_points"].is_i64());
}
