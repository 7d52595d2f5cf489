use crate::generator::TemplatePair;
use crate::model::{QuestionId, TopicTag};

/// Paired statements used to mint fresh true/false items each session.
pub const TEMPLATE_PAIRS: &[TemplatePair] = &[
    TemplatePair {
        base_id: QuestionId::new(58),
        tag: TopicTag::Tooling,
        true_text: "ぱてべらは したじを たいらに するときに つかう こうぐです。",
        false_text: "ぱてべらは かべがみを せつだんするときに つかう こうぐです。",
    },
    TemplatePair {
        base_id: QuestionId::new(57),
        tag: TopicTag::Tooling,
        true_text: "じべらは かべがみを せつだんするときに つかう こうぐです。",
        false_text: "じべらは ぱてを かけるときの こうぐです。",
    },
    TemplatePair {
        base_id: QuestionId::new(63),
        tag: TopicTag::Tooling,
        true_text: "すむーさーは かべがみの くうきを ぬくときに つかいます。",
        false_text: "すむーさーは かべがみの のりつけに つかいます。",
    },
    TemplatePair {
        base_id: QuestionId::new(70),
        tag: TopicTag::Tooling,
        true_text: "じょいんとぶ は ろーらーで おさえます。",
        false_text: "じょいんとぶ には ろーらーは つかいません。",
    },
    TemplatePair {
        base_id: QuestionId::new(36),
        tag: TopicTag::Tooling,
        true_text: "かべがみを さいだんするときは かったーを つかいます。",
        false_text: "かべがみを さいだんするときは くしばけを つかいます。",
    },
    TemplatePair {
        base_id: QuestionId::new(46),
        tag: TopicTag::Safety,
        true_text: "へやの なかで しんなーを つかうときは まどを あけます。",
        false_text: "へやの なかで しんなーを つかうときは まどを しめます。",
    },
    TemplatePair {
        base_id: QuestionId::new(65),
        tag: TopicTag::Safety,
        true_text: "きゃたつの てんばんに のっては なりません。",
        false_text: "きゃたつの てんばんに のって さぎょうしても よいです。",
    },
    TemplatePair {
        base_id: QuestionId::new(51),
        tag: TopicTag::Safety,
        true_text: "きゃたつは ひくくても とびおりては いけません。",
        false_text: "きゃたつは ひくければ とびおりても よいです。",
    },
    TemplatePair {
        base_id: QuestionId::new(45),
        tag: TopicTag::Safety,
        true_text: "ほごぼうを かぶるときは あごひもを しめます。",
        false_text: "ほごぼうを かぶるときは あごひもは しなくても よいです。",
    },
    TemplatePair {
        base_id: QuestionId::new(61),
        tag: TopicTag::Safety,
        true_text: "🚫 の さいんの ばしょには はいっては いけません。",
        false_text: "🚫 の さいんは きんしの まーくでは ありません。",
    },
    TemplatePair {
        base_id: QuestionId::new(32),
        tag: TopicTag::Procedure,
        true_text: "しーらーや ぷらいまーは したじの つきを よくするために つかいます。",
        false_text: "しーらーや ぷらいまーは かべがみの せっちゃくりょくを さげるために つかいます。",
    },
    TemplatePair {
        base_id: QuestionId::new(25),
        tag: TopicTag::Procedure,
        true_text: "てんじょうと へきめんに はる ときは じょいんとぶに ぱてしょりを します。",
        false_text: "てんじょうと へきめんに はる ときは じょいんとぶに ぱてしょりは しません。",
    },
    TemplatePair {
        base_id: QuestionId::new(91),
        tag: TopicTag::Procedure,
        true_text: "がらもの の かべがみは がらあわせ を して はります。",
        false_text: "がらもの の かべがみは がらあわせ を しません。",
    },
    TemplatePair {
        base_id: QuestionId::new(41),
        tag: TopicTag::Procedure,
        true_text: "はりおわったら みきりぶちの のりを ふきとります。",
        false_text: "はりおわっても のりは ふきとりません。",
    },
];
